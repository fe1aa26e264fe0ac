use crate::config::site::delivery;

/// Форматирует число с разделителями тысяч (пробелами)
pub fn format_number(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    let grouped: String = result.chars().rev().collect();
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Цена для показа: «1 050 ₸» либо «Цена не указана».
/// Нулевая цена трактуется как неуказанная, как и в карточках каталога.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => {
            format!("{} {}", format_number(p.round() as i64), delivery::CURRENCY)
        }
        _ => "Цена не указана".to_string(),
    }
}

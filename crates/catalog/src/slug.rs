use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// Slug generation
// ============================================================================

/// Максимальная длина основы slug (без суффикса идентификатора)
const MAX_STEM_LEN: usize = 100;

/// Сколько символов идентификатора уходит в суффикс
const ID_SUFFIX_LEN: usize = 8;

/// Транслитерация кириллицы (русский + казахский алфавит).
/// Непокрытые символы проходят без изменений.
static TRANSLIT: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"),
        ('е', "e"), ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"),
        ('й', "y"), ('к', "k"), ('л', "l"), ('м', "m"), ('н', "n"),
        ('о', "o"), ('п', "p"), ('р', "r"), ('с', "s"), ('т', "t"),
        ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "ts"), ('ч', "ch"),
        ('ш', "sh"), ('щ', "sch"), ('ъ', ""), ('ы', "y"), ('ь', ""),
        ('э', "e"), ('ю', "yu"), ('я', "ya"),
        ('қ', "q"), ('ғ', "g"), ('ү', "u"), ('ұ', "u"), ('ө', "o"),
        ('ә', "a"), ('і', "i"), ('ң', "n"), ('һ', "h"),
    ])
});

/// Построить URL-safe slug из названия товара и его идентификатора.
///
/// Функция чистая и детерминированная: она же используется как ключ поиска,
/// когда в таблице slug не сохранён. К основе всегда добавляется суффикс из
/// первых символов идентификатора — это снижает вероятность коллизий между
/// одноимёнными товарами. Если после транслитерации не осталось ни одного
/// допустимого символа, возвращается сам идентификатор.
pub fn generate_slug(name: &str, id: &str) -> String {
    let mut stem = String::new();
    let mut gap = false;

    for ch in name.to_lowercase().chars() {
        let mapped: String = match TRANSLIT.get(&ch) {
            Some(t) => t.to_string(),
            None => ch.to_string(),
        };
        for c in mapped.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if gap && !stem.is_empty() {
                    stem.push('-');
                }
                gap = false;
                stem.push(c);
            } else {
                gap = true;
            }
        }
        if stem.len() >= MAX_STEM_LEN {
            break;
        }
    }

    stem.truncate(MAX_STEM_LEN);
    while stem.ends_with('-') {
        stem.pop();
    }

    if stem.is_empty() {
        return id.to_string();
    }

    let suffix: String = id.chars().take(ID_SUFFIX_LEN).collect();
    if suffix.is_empty() {
        stem
    } else {
        format!("{}-{}", stem, suffix)
    }
}

use catalog::cart::Cart;
use contracts::domain::cart::CartItem;
use contracts::domain::product::Product;
use leptos::prelude::*;

use crate::shared::format::format_price;

const STORAGE_KEY: &str = "paida_cart_v1";

/// Сервис корзины: реактивное состояние плюс сохранение в localStorage.
/// Кладётся в контекст приложения один раз, в `App`.
#[derive(Clone, Copy)]
pub struct CartService {
    cart: RwSignal<Cart>,
}

impl CartService {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(load()),
        }
    }

    pub fn cart(&self) -> RwSignal<Cart> {
        self.cart
    }

    pub fn add(&self, product: &Product) {
        self.cart.update(|c| c.add(product));
        self.persist();
    }

    pub fn remove(&self, product_id: &str) {
        self.cart.update(|c| c.remove(product_id));
        self.persist();
    }

    pub fn set_quantity(&self, product_id: &str, quantity: u32) {
        self.cart.update(|c| c.set_quantity(product_id, quantity));
        self.persist();
    }

    pub fn clear(&self) {
        self.cart.update(|c| c.clear());
        self.persist();
    }

    /// Суммарное количество товаров — для бейджа в шапке (реактивно)
    pub fn total_count(&self) -> u32 {
        self.cart.with(|c| c.total_count())
    }

    fn persist(&self) {
        self.cart.with_untracked(save);
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartService {
    use_context::<CartService>().expect("CartService context not found")
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load() -> Cart {
    let Some(storage) = storage() else {
        return Cart::new();
    };
    let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) else {
        return Cart::new();
    };
    match serde_json::from_str::<Vec<CartItem>>(&raw) {
        Ok(items) => Cart::from_items(items),
        Err(e) => {
            log::warn!("корзина в localStorage повреждена: {}", e);
            Cart::new()
        }
    }
}

fn save(cart: &Cart) {
    let Some(storage) = storage() else {
        return;
    };
    match serde_json::to_string(cart.items()) {
        Ok(json) => {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
        Err(e) => log::warn!("не удалось сохранить корзину: {}", e),
    }
}

/// Человекочитаемый текст заказа для исходящего сообщения
pub fn order_message(cart: &Cart) -> String {
    let mut text = String::from("Здравствуйте! Хочу оформить заказ:\n");
    for (i, item) in cart.items().iter().enumerate() {
        match item.price {
            Some(p) if p > 0.0 => text.push_str(&format!(
                "\n{}. {} — {} шт. × {} = {}",
                i + 1,
                item.name,
                item.quantity,
                format_price(item.price),
                format_price(item.line_total()),
            )),
            _ => text.push_str(&format!(
                "\n{}. {} — {} шт. (цена не указана)",
                i + 1,
                item.name,
                item.quantity,
            )),
        }
    }
    let total = cart.total_amount();
    if total > 0.0 {
        text.push_str(&format!("\n\nИтого: {}", format_price(Some(total))));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_message_lists_lines_and_total() {
        let mut cart = Cart::new();
        let mut gloves = Product::empty("1");
        gloves.name = "Перчатки".to_string();
        gloves.price = Some(500.0);
        cart.add(&gloves);
        cart.add(&gloves);

        let mut unpriced = Product::empty("2");
        unpriced.name = "Образец".to_string();
        cart.add(&unpriced);

        let message = order_message(&cart);
        assert!(message.contains("1. Перчатки — 2 шт. × 500 ₸ = 1 000 ₸"));
        assert!(message.contains("2. Образец — 1 шт. (цена не указана)"));
        assert!(message.ends_with("Итого: 1 000 ₸"));
    }

    #[test]
    fn test_order_message_without_prices_has_no_total() {
        let mut cart = Cart::new();
        let mut p = Product::empty("1");
        p.name = "Образец".to_string();
        cart.add(&p);

        let message = order_message(&cart);
        assert!(!message.contains("Итого"));
    }
}

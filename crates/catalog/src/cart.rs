use contracts::domain::cart::CartItem;
use contracts::domain::product::Product;
use serde::{Deserialize, Serialize};

// ============================================================================
// Cart
// ============================================================================

/// Корзина: список позиций, ключом служит идентификатор товара.
/// Повторное добавление увеличивает количество, а не плодит строки.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Восстановить корзину из сохранённых позиций (например, localStorage).
    /// Дубликаты по товару сливаются, нулевые количества выбрасываются.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(&item.product_id) {
                Some(pos) => cart.items[pos].quantity += item.quantity,
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Добавить товар: существующая позиция получает +1 к количеству
    pub fn add(&mut self, product: &Product) {
        match self.position(&product.id) {
            Some(pos) => self.items[pos].quantity += 1,
            None => self.items.push(CartItem::from_product(product)),
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Установить количество; ноль удаляет позицию
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(pos) = self.position(product_id) {
            self.items[pos].quantity = quantity;
        }
    }

    /// Общее количество товаров (сумма количеств по позициям)
    pub fn total_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Сумма заказа по позициям с указанной ценой
    pub fn total_amount(&self) -> f64 {
        self.items.iter().filter_map(|i| i.line_total()).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: Option<f64>) -> Product {
        let mut p = Product::empty(id);
        p.name = name.to_string();
        p.price = price;
        p
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new();
        let p = product("1", "Губка", Some(120.0));
        cart.add(&p);
        cart.add(&p);
        cart.add(&product("2", "Мыло", Some(90.0)));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_amount(), 330.0);
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let mut cart = Cart::new();
        cart.add(&product("1", "Губка", Some(120.0)));
        cart.set_quantity("1", 5);
        assert_eq!(cart.total_count(), 5);

        cart.set_quantity("1", 0);
        assert!(cart.is_empty());

        // установка количества для отсутствующего товара — no-op
        cart.set_quantity("нет", 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unpriced_lines_do_not_break_total() {
        let mut cart = Cart::new();
        cart.add(&product("1", "Губка", Some(120.0)));
        cart.add(&product("2", "Без цены", None));
        assert_eq!(cart.total_count(), 2);
        assert_eq!(cart.total_amount(), 120.0);
    }

    #[test]
    fn test_from_items_merges_duplicates() {
        let p = product("1", "Губка", Some(120.0));
        let mut one = CartItem::from_product(&p);
        one.quantity = 2;
        let two = CartItem::from_product(&p);
        let mut zero = CartItem::from_product(&product("2", "Пустой", None));
        zero.quantity = 0;

        let cart = Cart::from_items(vec![one, two, zero]);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_snapshot_is_not_resynced() {
        let mut cart = Cart::new();
        let mut p = product("1", "Губка", Some(120.0));
        cart.add(&p);

        // товар в каталоге подорожал — позиция корзины не меняется
        p.price = Some(999.0);
        cart.add(&p);
        assert_eq!(cart.items()[0].price, Some(120.0));
        assert_eq!(cart.items()[0].quantity, 2);
    }
}

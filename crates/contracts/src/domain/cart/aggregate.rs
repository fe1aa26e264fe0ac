use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

// ============================================================================
// Cart line item
// ============================================================================

/// Позиция корзины.
///
/// Название, цена и картинка — снимки на момент добавления; при изменении
/// товара в каталоге позиция НЕ пересинхронизируется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub price: Option<f64>,
    pub img: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// Снять снимок товара для корзины (количество = 1)
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            img: product.img.clone(),
            quantity: 1,
        }
    }

    /// Сумма по строке; None, если цена не указана
    pub fn line_total(&self) -> Option<f64> {
        self.price.map(|p| p * self.quantity as f64)
    }
}

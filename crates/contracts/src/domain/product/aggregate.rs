use serde::{Deserialize, Serialize};

// ============================================================================
// Product
// ============================================================================

/// Товар каталога в том виде, в каком его отдаёт хостируемая таблица.
///
/// Почти все поля опциональны: строки заполняются вручную, и отсутствие
/// категории, производителя или цены — нормальная ситуация, а не ошибка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Уникальный идентификатор записи (непрозрачная строка)
    pub id: String,

    /// Отображаемое название товара
    #[serde(default)]
    pub name: String,

    /// Цена в целых единицах валюты; None — «цена не указана»
    pub price: Option<f64>,

    /// Ссылка на изображение; None — плейсхолдер
    pub img: Option<String>,

    /// Категория товара (может отсутствовать)
    pub category: Option<String>,

    /// Подкатегория / «тип» — единое измерение фасета
    pub subcategory: Option<String>,

    /// Производитель товара
    pub producer: Option<String>,

    /// Описание в свободной форме
    pub description: Option<String>,

    /// URL-safe идентификатор; пустая строка, если в таблице не задан.
    /// Адаптер репозитория подставляет синтетический slug.
    #[serde(default)]
    pub slug: String,

    /// Количество в упаковке (текст, например «12 шт.»)
    #[serde(rename = "inBox")]
    pub in_box: Option<String>,

    /// Архивные товары не попадают ни в один пользовательский список
    #[serde(default)]
    pub archived: bool,

    /// Приоритет сортировки: меньше — раньше, None — в конец
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,

    /// Серверная отметка создания записи
    #[serde(rename = "created_at")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    /// Пустая заготовка с заданным идентификатором (для тестов и форм)
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            price: None,
            img: None,
            category: None,
            subcategory: None,
            producer: None,
            description: None,
            slug: String::new(),
            in_box: None,
            archived: false,
            sort_order: None,
            created_at: None,
        }
    }
}

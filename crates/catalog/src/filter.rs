use contracts::domain::product::Product;
use serde::{Deserialize, Serialize};

use crate::facets::{NO_CATEGORY, NO_MANUFACTURER};

// ============================================================================
// Selection state
// ============================================================================

/// Допустимые размеры страницы каталога
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [24, 48, 96, 192];

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 48;

/// Политика выбора значений фасета.
///
/// `Multi` — щелчок переключает членство значения в наборе (десктопный
/// сайдбар). `SingleReplace` — выбор заменяет весь набор и каскадно
/// сбрасывает нижние уровни иерархии производитель → категория → тип
/// (мобильное меню).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Multi,
    SingleReplace,
}

/// Порядок выдачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

/// Состояние фильтров каталога. Живёт в рамках сессии просмотра,
/// никуда не сохраняется (кроме строки запроса URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    mode: SelectionMode,
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub manufacturers: Vec<String>,
    pub search: String,
    pub sort: SortOption,
    /// Номер страницы, 1-based; движок сам зажимает в допустимый диапазон
    pub page: usize,
    pub page_size: usize,
}

impl FilterState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            categories: Vec::new(),
            types: Vec::new(),
            manufacturers: Vec::new(),
            search: String::new(),
            sort: SortOption::Default,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty()
            || !self.types.is_empty()
            || !self.manufacturers.is_empty()
            || !self.search.is_empty()
    }

    /// Количество выбранных значений по всем измерениям (для счётчика в UI)
    pub fn selected_count(&self) -> usize {
        self.categories.len() + self.types.len() + self.manufacturers.len()
    }

    pub fn toggle_category(&mut self, name: &str) {
        match self.mode {
            SelectionMode::Multi => toggle(&mut self.categories, name),
            SelectionMode::SingleReplace => {
                // выбор категории заменяет набор и сбрасывает типы
                if self.categories.iter().any(|c| c == name) {
                    self.categories.clear();
                } else {
                    self.categories = vec![name.to_string()];
                }
                self.types.clear();
            }
        }
        self.page = 1;
    }

    pub fn toggle_type(&mut self, name: &str) {
        match self.mode {
            SelectionMode::Multi => toggle(&mut self.types, name),
            SelectionMode::SingleReplace => {
                if self.types.iter().any(|t| t == name) {
                    self.types.clear();
                } else {
                    self.types = vec![name.to_string()];
                }
            }
        }
        self.page = 1;
    }

    pub fn toggle_manufacturer(&mut self, name: &str) {
        match self.mode {
            SelectionMode::Multi => toggle(&mut self.manufacturers, name),
            SelectionMode::SingleReplace => {
                // смена производителя каскадно сбрасывает категорию и тип
                if self.manufacturers.iter().any(|m| m == name) {
                    self.manufacturers.clear();
                } else {
                    self.manufacturers = vec![name.to_string()];
                }
                self.categories.clear();
                self.types.clear();
            }
        }
        self.page = 1;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Размер страницы вне допустимого набора заменяется значением по умолчанию
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = if PAGE_SIZE_OPTIONS.contains(&size) {
            size
        } else {
            DEFAULT_PAGE_SIZE
        };
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// «Сбросить фильтры»: все наборы и строка поиска пустеют,
    /// пагинация возвращается на первую страницу
    pub fn clear(&mut self) {
        self.categories.clear();
        self.types.clear();
        self.manufacturers.clear();
        self.search.clear();
        self.page = 1;
    }
}

fn toggle(set: &mut Vec<String>, name: &str) {
    if let Some(pos) = set.iter().position(|v| v == name) {
        set.remove(pos);
    } else {
        set.push(name.to_string());
    }
}

// ============================================================================
// Filter / sort / paginate engine
// ============================================================================

/// Видимая страница выдачи
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<Product>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Фактический номер страницы после зажима в допустимый диапазон
    pub page: usize,
}

/// Применить фильтры, сортировку и пагинацию к набору товаров.
///
/// Предикат — логическое И по всем активным измерениям; пустое измерение
/// пропускает всё. Сортировки по цене стабильны, поэтому при равных ценах
/// сохраняется порядок репозитория — выдача не «мерцает» между пересчётами.
pub fn apply(products: &[Product], state: &FilterState) -> PageResult {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, state))
        .cloned()
        .collect();

    match state.sort {
        SortOption::Default => {}
        SortOption::PriceAsc => {
            filtered.sort_by(|a, b| price_of(a).total_cmp(&price_of(b)));
        }
        SortOption::PriceDesc => {
            filtered.sort_by(|a, b| price_of(b).total_cmp(&price_of(a)));
        }
    }

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(state.page_size);
    let page = state.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * state.page_size;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(state.page_size)
        .collect();

    PageResult {
        items,
        total_count,
        total_pages,
        page,
    }
}

fn matches(product: &Product, state: &FilterState) -> bool {
    matches_categories(product, &state.categories)
        && matches_types(product, &state.types)
        && matches_manufacturers(product, &state.manufacturers)
        && matches_search(product, &state.search)
}

/// Категория сравнивается после подстановки сентинеля «Без категории»
pub(crate) fn matches_categories(product: &Product, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let category = product.category.as_deref().unwrap_or(NO_CATEGORY);
    selected.iter().any(|c| c == category)
}

/// У типа сентинеля нет: товар без подкатегории не проходит фильтр по типу
pub(crate) fn matches_types(product: &Product, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    match product.subcategory.as_deref() {
        Some(t) => selected.iter().any(|s| s == t),
        None => false,
    }
}

pub(crate) fn matches_manufacturers(product: &Product, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let producer = product.producer.as_deref().unwrap_or(NO_MANUFACTURER);
    selected.iter().any(|m| m == producer)
}

fn matches_search(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    let hit = |field: Option<&str>| {
        field
            .map(|v| v.to_lowercase().contains(&q))
            .unwrap_or(false)
    };
    hit(Some(product.name.as_str()))
        || hit(product.category.as_deref())
        || hit(product.description.as_deref())
        || hit(product.producer.as_deref())
}

fn price_of(product: &Product) -> f64 {
    product.price.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: Option<&str>, producer: Option<&str>, price: Option<f64>) -> Product {
        let mut p = Product::empty(id);
        p.name = format!("Товар {}", id);
        p.category = category.map(str::to_string);
        p.producer = producer.map(str::to_string);
        p.price = price;
        p
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", Some("A"), Some("M1"), Some(100.0)),
            product("2", Some("A"), Some("M2"), Some(50.0)),
            product("3", Some("B"), Some("M1"), Some(200.0)),
            product("4", None, None, None),
        ]
    }

    #[test]
    fn test_empty_state_passes_everything_in_order() {
        let products = sample();
        let state = FilterState::new(SelectionMode::Multi);
        let result = apply(&products, &state);
        assert_eq!(result.total_count, 4);
        let ids: Vec<&str> = result.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_category_then_price_asc_scenario() {
        // сценарий из приёмки: категория A + сортировка по возрастанию цены
        let products = sample();
        let mut state = FilterState::new(SelectionMode::Multi);
        state.toggle_category("A");
        state.set_sort(SortOption::PriceAsc);

        let result = apply(&products, &state);
        assert_eq!(result.total_count, 2);
        let prices: Vec<Option<f64>> = result.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, [Some(50.0), Some(100.0)]);
    }

    #[test]
    fn test_dimensions_intersect_regardless_of_order() {
        let products = sample();

        let mut ab = FilterState::new(SelectionMode::Multi);
        ab.toggle_category("A");
        ab.toggle_manufacturer("M1");

        let mut ba = FilterState::new(SelectionMode::Multi);
        ba.toggle_manufacturer("M1");
        ba.toggle_category("A");

        let left = apply(&products, &ab);
        let right = apply(&products, &ba);
        assert_eq!(left.items, right.items);
        assert_eq!(left.total_count, 1);
        assert_eq!(left.items[0].id, "1");
    }

    #[test]
    fn test_sentinel_category_and_manufacturer() {
        let products = sample();

        let mut state = FilterState::new(SelectionMode::Multi);
        state.toggle_category(crate::facets::NO_CATEGORY);
        let result = apply(&products, &state);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].id, "4");

        let mut state = FilterState::new(SelectionMode::Multi);
        state.toggle_manufacturer(crate::facets::NO_MANUFACTURER);
        let result = apply(&products, &state);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].id, "4");
    }

    #[test]
    fn test_search_is_case_insensitive_and_multi_field() {
        let mut products = sample();
        products[2].description = Some("Для мытья ПОСУДЫ".to_string());

        let mut state = FilterState::new(SelectionMode::Multi);
        state.set_search("посуды");
        let result = apply(&products, &state);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].id, "3");

        // пустой запрос пропускает всё без изменения порядка
        state.set_search("");
        let result = apply(&products, &state);
        assert_eq!(result.total_count, products.len());
    }

    #[test]
    fn test_price_desc_is_reverse_of_asc() {
        // цены различны, поэтому порядок обязан зеркалиться точно
        let products = sample();
        let mut asc = FilterState::new(SelectionMode::Multi);
        asc.set_sort(SortOption::PriceAsc);
        let mut desc = FilterState::new(SelectionMode::Multi);
        desc.set_sort(SortOption::PriceDesc);
        desc.set_page_size(192);
        asc.set_page_size(192);

        let up: Vec<String> = apply(&products, &asc).items.into_iter().map(|p| p.id).collect();
        let mut down: Vec<String> = apply(&products, &desc).items.into_iter().map(|p| p.id).collect();
        down.reverse();
        assert_eq!(up, down);
    }

    #[test]
    fn test_missing_price_sorts_as_zero() {
        let products = sample();
        let mut state = FilterState::new(SelectionMode::Multi);
        state.set_sort(SortOption::PriceAsc);
        let result = apply(&products, &state);
        assert_eq!(result.items[0].id, "4");
    }

    #[test]
    fn test_pagination_totals_and_clamp() {
        let products: Vec<Product> = (0..60)
            .map(|i| product(&i.to_string(), Some("A"), None, Some(i as f64)))
            .collect();

        let mut state = FilterState::new(SelectionMode::Multi);
        state.set_page_size(24);
        let first = apply(&products, &state);
        assert_eq!(first.total_count, 60);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 24);

        // сумма страниц равна общему количеству
        let mut seen = 0;
        for page in 1..=first.total_pages {
            state.set_page(page);
            seen += apply(&products, &state).items.len();
        }
        assert_eq!(seen, 60);

        // запрос за последнюю страницу зажимается, а не падает
        state.set_page(99);
        let clamped = apply(&products, &state);
        assert_eq!(clamped.page, 3);
        assert_eq!(clamped.items.len(), 12);

        state.set_page(0);
        assert_eq!(apply(&products, &state).page, 1);
    }

    #[test]
    fn test_empty_result_has_page_one() {
        let products = sample();
        let mut state = FilterState::new(SelectionMode::Multi);
        state.set_search("такого товара нет");
        let result = apply(&products, &state);
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page, 1);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_clear_resets_selections_and_page() {
        let mut state = FilterState::new(SelectionMode::Multi);
        state.toggle_category("A");
        state.toggle_manufacturer("M1");
        state.set_search("перчатки");
        state.set_page(4);

        state.clear();
        assert!(!state.has_active_filters());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_multi_toggle_adds_and_removes() {
        let mut state = FilterState::new(SelectionMode::Multi);
        state.toggle_category("A");
        state.toggle_category("B");
        assert_eq!(state.categories, ["A", "B"]);
        state.toggle_category("A");
        assert_eq!(state.categories, ["B"]);
    }

    #[test]
    fn test_single_replace_manufacturer_cascade() {
        // выбор M1, затем M2: остаётся ровно {M2}, нижние уровни сброшены
        let mut state = FilterState::new(SelectionMode::SingleReplace);
        state.toggle_manufacturer("M1");
        state.toggle_category("A");
        state.toggle_type("T1");
        assert_eq!(state.manufacturers, ["M1"]);
        assert_eq!(state.categories, ["A"]);

        state.toggle_manufacturer("M2");
        assert_eq!(state.manufacturers, ["M2"]);
        assert!(state.categories.is_empty());
        assert!(state.types.is_empty());
    }

    #[test]
    fn test_single_replace_category_clears_types() {
        let mut state = FilterState::new(SelectionMode::SingleReplace);
        state.toggle_category("A");
        state.toggle_type("T1");
        state.toggle_category("B");
        assert_eq!(state.categories, ["B"]);
        assert!(state.types.is_empty());
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let mut state = FilterState::new(SelectionMode::Multi);
        state.set_page_size(37);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        state.set_page_size(96);
        assert_eq!(state.page_size, 96);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = FilterState::new(SelectionMode::Multi);
        state.set_page(5);
        state.toggle_category("A");
        assert_eq!(state.page, 1);

        state.set_page(5);
        state.set_search("x");
        assert_eq!(state.page, 1);

        state.set_page(5);
        state.set_page_size(24);
        assert_eq!(state.page, 1);
    }
}

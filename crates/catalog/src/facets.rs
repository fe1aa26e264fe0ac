use std::collections::BTreeMap;

use contracts::domain::product::Product;

use crate::filter::{matches_categories, matches_manufacturers, FilterState};

// ============================================================================
// Facet aggregation
// ============================================================================

/// Сентинель для товаров без категории. Только для показа и выбора,
/// в хранилище ничего не переписывается.
pub const NO_CATEGORY: &str = "Без категории";

/// Сентинель для товаров без производителя
pub const NO_MANUFACTURER: &str = "Без производителя";

/// Политика подсчёта фасетов.
///
/// `Flat` — все три измерения считаются по полному набору (десктопный
/// сайдбар). `Hierarchical` — категории сужаются выбранными производителями,
/// типы — производителями и категориями (мобильное меню
/// производитель → категория → тип).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetMode {
    Flat,
    Hierarchical,
}

/// Значение фасета с количеством товаров
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue {
    pub name: String,
    pub count: usize,
}

/// Категория с вложенными типами (дерево сайдбара)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub name: String,
    pub count: usize,
    pub types: Vec<FacetValue>,
}

/// Три измерения фасетов текущей выдачи
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetTree {
    pub manufacturers: Vec<FacetValue>,
    pub categories: Vec<CategoryNode>,
    pub types: Vec<FacetValue>,
}

impl FacetTree {
    pub fn is_empty(&self) -> bool {
        self.manufacturers.is_empty() && self.categories.is_empty() && self.types.is_empty()
    }
}

/// Построить деревья фасетов по неархивному набору товаров.
///
/// Производители всегда считаются по полному набору: выбор производителя не
/// скрывает соседние варианты. Сужение категорий и типов зависит от режима.
pub fn build_facets(products: &[Product], state: &FilterState, mode: FacetMode) -> FacetTree {
    // производители — по полному набору
    let mut manufacturer_counts: BTreeMap<String, usize> = BTreeMap::new();
    for p in products {
        let name = p.producer.as_deref().unwrap_or(NO_MANUFACTURER);
        *manufacturer_counts.entry(name.to_string()).or_insert(0) += 1;
    }

    // базовый набор для категорий
    let category_base: Vec<&Product> = match mode {
        FacetMode::Flat => products.iter().collect(),
        FacetMode::Hierarchical => products
            .iter()
            .filter(|p| matches_manufacturers(p, &state.manufacturers))
            .collect(),
    };

    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut category_types: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for p in &category_base {
        let name = p.category.as_deref().unwrap_or(NO_CATEGORY);
        *category_counts.entry(name.to_string()).or_insert(0) += 1;
        if let Some(t) = p.subcategory.as_deref() {
            *category_types
                .entry(name.to_string())
                .or_default()
                .entry(t.to_string())
                .or_insert(0) += 1;
        }
    }

    // базовый набор для типов: в иерархии сужается ещё и категориями
    let type_base: Vec<&Product> = match mode {
        FacetMode::Flat => products.iter().collect(),
        FacetMode::Hierarchical => category_base
            .iter()
            .copied()
            .filter(|p| matches_categories(p, &state.categories))
            .collect(),
    };

    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for p in &type_base {
        if let Some(t) = p.subcategory.as_deref() {
            *type_counts.entry(t.to_string()).or_insert(0) += 1;
        }
    }

    let mut tree = FacetTree {
        manufacturers: into_sorted_values(manufacturer_counts),
        categories: category_counts
            .into_iter()
            .map(|(name, count)| {
                let types = category_types
                    .remove(&name)
                    .map(into_sorted_values)
                    .unwrap_or_default();
                CategoryNode { name, count, types }
            })
            .collect(),
        types: into_sorted_values(type_counts),
    };

    tree.categories
        .sort_by(|a, b| collation_key(&a.name).cmp(&collation_key(&b.name)));
    tree
}

fn into_sorted_values(counts: BTreeMap<String, usize>) -> Vec<FacetValue> {
    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(name, count)| FacetValue { name, count })
        .collect();
    values.sort_by(|a, b| collation_key(&a.name).cmp(&collation_key(&b.name)));
    values
}

/// Ключ сортировки, приближающий русское лексикографическое упорядочивание:
/// нижний регистр, «ё» приравнивается к «е»
fn collation_key(s: &str) -> String {
    s.to_lowercase().replace('ё', "е")
}

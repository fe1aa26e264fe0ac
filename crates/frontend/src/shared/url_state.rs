//! Синхронизация состояния фильтров со строкой запроса URL.
//!
//! Исторически в URL жил только параметр `search`; теперь весь выбор
//! (поиск, категории, типы, производители, сортировка, размер страницы)
//! переживает обновление страницы и попадает в расшаренные ссылки.

use catalog::filter::{FilterState, SelectionMode, SortOption};
use serde::{Deserialize, Serialize};

/// Снимок фильтров в форме, пригодной для строки запроса
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuerySnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manufacturers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl QuerySnapshot {
    pub fn capture(filter: &FilterState) -> Self {
        Self {
            search: if filter.search.is_empty() {
                None
            } else {
                Some(filter.search.clone())
            },
            categories: filter.categories.clone(),
            types: filter.types.clone(),
            manufacturers: filter.manufacturers.clone(),
            sort: match filter.sort {
                SortOption::Default => None,
                other => Some(other),
            },
            page_size: if filter.page_size == catalog::filter::DEFAULT_PAGE_SIZE {
                None
            } else {
                Some(filter.page_size)
            },
        }
    }

    pub fn into_filter(self, mode: SelectionMode) -> FilterState {
        let mut filter = FilterState::new(mode);
        filter.categories = self.categories;
        filter.types = self.types;
        filter.manufacturers = self.manufacturers;
        if let Some(search) = self.search {
            filter.set_search(search);
        }
        if let Some(sort) = self.sort {
            filter.set_sort(sort);
        }
        if let Some(size) = self.page_size {
            filter.set_page_size(size);
        }
        filter
    }
}

pub fn encode(filter: &FilterState) -> String {
    serde_qs::to_string(&QuerySnapshot::capture(filter)).unwrap_or_default()
}

pub fn decode(query: &str, mode: SelectionMode) -> FilterState {
    let raw = query.trim_start_matches('?');
    if raw.is_empty() {
        return FilterState::new(mode);
    }
    match serde_qs::from_str::<QuerySnapshot>(raw) {
        Ok(snapshot) => snapshot.into_filter(mode),
        Err(e) => {
            log::warn!("не удалось разобрать строку запроса: {}", e);
            FilterState::new(mode)
        }
    }
}

/// Прочитать фильтры из адресной строки
pub fn read_from_location(mode: SelectionMode) -> FilterState {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    decode(&search, mode)
}

/// Записать фильтры в адресную строку без навигации и перезагрузки
pub fn write_to_history(filter: &FilterState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let pathname = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    let query = encode(filter);
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{}?{}", pathname, query)
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

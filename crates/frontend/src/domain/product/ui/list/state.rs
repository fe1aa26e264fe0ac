use catalog::filter::{FilterState, SelectionMode};
use leptos::prelude::*;

/// Плотность отображения каталога; на выдачу не влияет
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    Compact,
}

#[derive(Clone, Debug)]
pub struct CatalogListState {
    // Фильтры, сортировка, пагинация — движок каталога
    pub filter: FilterState,

    // Представление
    pub view_mode: ViewMode,

    // Флаг загрузки
    pub is_loaded: bool,

    // Монотонный номер запроса: ответы устаревших запросов отбрасываются
    pub fetch_seq: u64,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            filter: FilterState::new(SelectionMode::Multi),
            view_mode: ViewMode::Grid,
            is_loaded: false,
            fetch_seq: 0,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}

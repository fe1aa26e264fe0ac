pub mod filter_sidebar;
pub mod product_card;
pub mod state;

use catalog::facets::{build_facets, FacetMode};
use catalog::filter::{apply, PageResult, SelectionMode, SortOption, PAGE_SIZE_OPTIONS};
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::domain::product::api::fetch_all_products;
use crate::shared::url_state;
use filter_sidebar::FilterSidebar;
use product_card::ProductCard;
use state::{create_state, CatalogListState, ViewMode};

/// Окно номеров страниц в пагинаторе
const PAGE_WINDOW: usize = 7;

#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let state = create_state();
    let products = RwSignal::new(Vec::<Product>::new());
    let error = RwSignal::new(None::<String>);

    // Восстанавливаем фильтры из адресной строки
    state.update(|s| s.filter = url_state::read_from_location(SelectionMode::Multi));

    // Параметр `search` живёт в навигации: шапка ведёт на /?search=...
    let query = use_query_map();
    Effect::new(move |_| {
        let q = query.with(|m| m.get("search").unwrap_or_default());
        state.update(|s| {
            if s.filter.search != q {
                s.filter.set_search(q);
            }
        });
    });

    // Выбор фильтров переживает обновление страницы и попадает в ссылки
    Effect::new(move |_| {
        url_state::write_to_history(&state.get().filter);
    });

    let load = move || {
        let seq = state.with_untracked(|s| s.fetch_seq) + 1;
        state.update(|s| {
            s.fetch_seq = seq;
            s.is_loaded = false;
        });
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_all_products().await;
            // за время запроса стартовал новый — этот ответ устарел
            if state.with_untracked(|s| s.fetch_seq) != seq {
                return;
            }
            match result {
                Ok(v) => products.set(v),
                Err(e) => {
                    log::error!("загрузка каталога не удалась: {}", e);
                    error.set(Some(e));
                }
            }
            state.update(|s| s.is_loaded = true);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let page_result = Memo::new(move |_| apply(&products.get(), &state.get().filter));
    let facets =
        Memo::new(move |_| build_facets(&products.get(), &state.get().filter, FacetMode::Flat));

    let page_title = move || {
        let s = state.get();
        if !s.filter.search.is_empty() {
            format!("Поиск: «{}»", s.filter.search)
        } else if s.filter.categories.len() == 1 {
            s.filter.categories[0].clone()
        } else {
            "Все товары".to_string()
        }
    };

    view! {
        <div class="catalog">
            <div class="catalog__toolbar">
                <div>
                    <h1 class="catalog__title">{page_title}</h1>
                    <p class="catalog__counter">
                        {move || {
                            if state.get().is_loaded {
                                format!(
                                    "{} товаров из {}",
                                    page_result.get().total_count,
                                    products.get().len()
                                )
                            } else {
                                "Загрузка...".to_string()
                            }
                        }}
                    </p>
                </div>

                <div class="catalog__controls">
                    <label>
                        "На странице: "
                        <select on:change=move |ev| {
                            let size = event_target_value(&ev).parse().unwrap_or_default();
                            state.update(|s| s.filter.set_page_size(size));
                        }>
                            {PAGE_SIZE_OPTIONS
                                .into_iter()
                                .map(|n| {
                                    view! {
                                        <option
                                            value=n.to_string()
                                            selected=move || state.get().filter.page_size == n
                                        >
                                            {format!("{} шт.", n)}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <label>
                        "Сортировка: "
                        <select on:change=move |ev| {
                            let sort = match event_target_value(&ev).as_str() {
                                "price-asc" => SortOption::PriceAsc,
                                "price-desc" => SortOption::PriceDesc,
                                _ => SortOption::Default,
                            };
                            state.update(|s| s.filter.set_sort(sort));
                        }>
                            <option
                                value="default"
                                selected=move || state.get().filter.sort == SortOption::Default
                            >
                                "По умолчанию"
                            </option>
                            <option
                                value="price-asc"
                                selected=move || state.get().filter.sort == SortOption::PriceAsc
                            >
                                "Сначала дешевле"
                            </option>
                            <option
                                value="price-desc"
                                selected=move || state.get().filter.sort == SortOption::PriceDesc
                            >
                                "Сначала дороже"
                            </option>
                        </select>
                    </label>
                </div>
            </div>

            <div class="catalog__layout">
                <FilterSidebar state=state facets=facets />

                <div class="catalog__results">
                    <Show
                        when=move || state.get().is_loaded
                        fallback=|| {
                            view! {
                                <div class="catalog__loading">
                                    <p>"Загрузка товаров..."</p>
                                </div>
                            }
                        }
                    >
                        {move || {
                            if let Some(e) = error.get() {
                                view! {
                                    <div class="catalog__error">
                                        <p class="catalog__error-title">"Ошибка загрузки товаров"</p>
                                        <p class="catalog__error-hint">
                                            "Попробуйте обновить страницу"
                                        </p>
                                        <p class="catalog__error-detail">{e}</p>
                                    </div>
                                }
                                    .into_any()
                            } else if page_result.get().items.is_empty() {
                                view! {
                                    <div class="catalog__empty">
                                        <p>"Товары не найдены"</p>
                                        <p class="catalog__empty-hint">
                                            "Попробуйте изменить параметры фильтра"
                                        </p>
                                        <button
                                            class="button button--ghost"
                                            on:click=move |_| state.update(|s| s.filter.clear())
                                        >
                                            "Сбросить фильтры"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class=move || match state.get().view_mode {
                                        ViewMode::Grid => "product-grid",
                                        ViewMode::Compact => "product-grid product-grid--compact",
                                    }>
                                        <For
                                            each=move || page_result.get().items
                                            key=|p| p.id.clone()
                                            children=move |p| {
                                                view! {
                                                    <ProductCard
                                                        product=p
                                                        view_mode=Signal::derive(move || {
                                                            state.get().view_mode
                                                        })
                                                    />
                                                }
                                            }
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                        }}

                        <Pagination state=state page_result=page_result />
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Видимые номера страниц: окно в PAGE_WINDOW вокруг текущей
fn page_numbers(current: usize, total: usize) -> Vec<usize> {
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }
    if current <= 4 {
        (1..=PAGE_WINDOW).collect()
    } else if current >= total - 3 {
        (total - PAGE_WINDOW + 1..=total).collect()
    } else {
        (current - 3..=current + 3).collect()
    }
}

fn go_to_page(state: RwSignal<CatalogListState>, page: usize) {
    state.update(|s| s.filter.set_page(page));
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
#[allow(non_snake_case)]
fn Pagination(state: RwSignal<CatalogListState>, page_result: Memo<PageResult>) -> impl IntoView {
    view! {
        <Show when={move || page_result.get().total_pages > 1}>
            <div class="pagination">
                <button
                    class="pagination__arrow"
                    disabled=move || page_result.get().page == 1
                    on:click=move |_| {
                        let page = page_result.get().page;
                        go_to_page(state, page.saturating_sub(1).max(1));
                    }
                >
                    "‹"
                </button>

                {move || {
                    let result = page_result.get();
                    page_numbers(result.page, result.total_pages)
                        .into_iter()
                        .map(|n| {
                            view! {
                                <button
                                    class=if n == result.page {
                                        "pagination__page pagination__page--current"
                                    } else {
                                        "pagination__page"
                                    }
                                    on:click=move |_| go_to_page(state, n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}

                <button
                    class="pagination__arrow"
                    disabled=move || page_result.get().page == page_result.get().total_pages
                    on:click=move |_| {
                        let result = page_result.get();
                        go_to_page(state, (result.page + 1).min(result.total_pages));
                    }
                >
                    "›"
                </button>

                <span class="pagination__summary">
                    {move || {
                        let result = page_result.get();
                        format!("Страница {} из {}", result.page, result.total_pages)
                    }}
                </span>
            </div>
        </Show>
    }
}

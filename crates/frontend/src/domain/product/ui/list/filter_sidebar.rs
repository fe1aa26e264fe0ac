use std::collections::HashSet;

use catalog::facets::{CategoryNode, FacetTree, FacetValue};
use leptos::prelude::*;

use super::state::{CatalogListState, ViewMode};

/// Сайдбар фильтров: категории с типами, производители, типы.
/// Состояние раскрытия секций и строки поиска по фасетам — локальные,
/// в контракт движка они не попадают.
#[component]
#[allow(non_snake_case)]
pub fn FilterSidebar(
    state: RwSignal<CatalogListState>,
    facets: Memo<FacetTree>,
) -> impl IntoView {
    let expanded_sections = RwSignal::new(HashSet::from([
        "categories".to_string(),
        "manufacturers".to_string(),
        "types".to_string(),
    ]));
    let expanded_categories = RwSignal::new(HashSet::<String>::new());

    let (search_category, set_search_category) = signal(String::new());
    let (search_manufacturer, set_search_manufacturer) = signal(String::new());
    let (search_type, set_search_type) = signal(String::new());

    let toggle_section = move |key: &'static str| {
        expanded_sections.update(|s| {
            if !s.remove(key) {
                s.insert(key.to_string());
            }
        });
    };
    let section_open = move |key: &'static str| expanded_sections.with(|s| s.contains(key));

    let has_filters = move || state.with(|s| s.filter.has_active_filters());

    view! {
        <aside class="sidebar">
            <div class="sidebar__view-mode">
                <span>"Вид:"</span>
                <button
                    class=move || view_mode_class(state, ViewMode::Grid)
                    on:click=move |_| state.update(|s| s.view_mode = ViewMode::Grid)
                >
                    "Сетка"
                </button>
                <button
                    class=move || view_mode_class(state, ViewMode::Compact)
                    on:click=move |_| state.update(|s| s.view_mode = ViewMode::Compact)
                >
                    "Список"
                </button>
            </div>

            <Show when=has_filters>
                <button
                    class="sidebar__clear"
                    on:click=move |_| state.update(|s| s.filter.clear())
                >
                    {move || {
                        format!(
                            "Сбросить фильтры ({})",
                            state.with(|s| s.filter.selected_count())
                        )
                    }}
                </button>
            </Show>

            // Категории с вложенными типами
            <section class="sidebar__section">
                <button
                    class="sidebar__section-header"
                    on:click=move |_| toggle_section("categories")
                >
                    "Категории"
                </button>
                <Show when=move || section_open("categories")>
                    <input
                        type="text"
                        placeholder="Поиск категории..."
                        prop:value=search_category
                        on:input=move |ev| set_search_category.set(event_target_value(&ev))
                    />
                    <ul class="sidebar__list">
                        {move || {
                            let q = search_category.get().to_lowercase();
                            facets
                                .get()
                                .categories
                                .into_iter()
                                .filter(|c| c.name.to_lowercase().contains(&q))
                                .map(|cat| category_item(state, expanded_categories, cat))
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>

            // Производители
            <section class="sidebar__section">
                <button
                    class="sidebar__section-header"
                    on:click=move |_| toggle_section("manufacturers")
                >
                    "Производители"
                </button>
                <Show when=move || section_open("manufacturers")>
                    <input
                        type="text"
                        placeholder="Поиск производителя..."
                        prop:value=search_manufacturer
                        on:input=move |ev| set_search_manufacturer.set(event_target_value(&ev))
                    />
                    <ul class="sidebar__list">
                        {move || {
                            let q = search_manufacturer.get().to_lowercase();
                            facets
                                .get()
                                .manufacturers
                                .into_iter()
                                .filter(|m| m.name.to_lowercase().contains(&q))
                                .map(|value| {
                                    facet_checkbox(
                                        value,
                                        move |s, name| {
                                            s.filter.manufacturers.iter().any(|m| m == name)
                                        },
                                        move |s, name| s.filter.toggle_manufacturer(name),
                                        state,
                                    )
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>

            // Типы (единое измерение «подкатегория»)
            <section class="sidebar__section">
                <button
                    class="sidebar__section-header"
                    on:click=move |_| toggle_section("types")
                >
                    "Тип"
                </button>
                <Show when=move || section_open("types")>
                    <input
                        type="text"
                        placeholder="Поиск типа..."
                        prop:value=search_type
                        on:input=move |ev| set_search_type.set(event_target_value(&ev))
                    />
                    <ul class="sidebar__list">
                        {move || {
                            let q = search_type.get().to_lowercase();
                            facets
                                .get()
                                .types
                                .into_iter()
                                .filter(|t| t.name.to_lowercase().contains(&q))
                                .map(|value| {
                                    facet_checkbox(
                                        value,
                                        move |s, name| s.filter.types.iter().any(|t| t == name),
                                        move |s, name| s.filter.toggle_type(name),
                                        state,
                                    )
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
        </aside>
    }
}

/// Строка фасета с чекбоксом и счётчиком
fn facet_checkbox(
    value: FacetValue,
    is_checked: impl Fn(&CatalogListState, &str) -> bool + Send + Sync + 'static,
    toggle: impl Fn(&mut CatalogListState, &str) + Send + Sync + 'static,
    state: RwSignal<CatalogListState>,
) -> impl IntoView {
    let label = format!("{} ({})", value.name, value.count);
    let check_name = value.name.clone();
    let toggle_name = value.name;

    view! {
        <li>
            <label class="sidebar__item">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| is_checked(s, &check_name))
                    on:change=move |_| state.update(|s| toggle(s, &toggle_name))
                />
                {label}
            </label>
        </li>
    }
}

/// Категория с раскрываемым списком типов
fn category_item(
    state: RwSignal<CatalogListState>,
    expanded: RwSignal<HashSet<String>>,
    cat: CategoryNode,
) -> impl IntoView {
    let label = format!("{} ({})", cat.name, cat.count);
    let check_name = cat.name.clone();
    let toggle_name = cat.name.clone();
    let expand_name = cat.name.clone();
    let open_name = cat.name;
    let types = cat.types;
    let has_types = !types.is_empty();

    view! {
        <li>
            <div class="sidebar__row">
                <label class="sidebar__item">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            state.with(|s| s.filter.categories.iter().any(|c| c == &check_name))
                        }
                        on:change=move |_| {
                            state.update(|s| s.filter.toggle_category(&toggle_name))
                        }
                    />
                    {label}
                </label>
                <Show when=move || has_types>
                    <button
                        class="sidebar__expand"
                        on:click={
                            let name = expand_name.clone();
                            move |_| {
                                expanded
                                    .update(|s| {
                                        if !s.remove(&name) {
                                            s.insert(name.clone());
                                        }
                                    })
                            }
                        }
                    >
                        "▾"
                    </button>
                </Show>
            </div>
            <Show when=move || expanded.with(|s| s.contains(&open_name))>
                <ul class="sidebar__sublist">
                    {types
                        .iter()
                        .map(|t| {
                            facet_checkbox(
                                t.clone(),
                                move |s, name| s.filter.types.iter().any(|v| v == name),
                                move |s, name| s.filter.toggle_type(name),
                                state,
                            )
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

fn view_mode_class(state: RwSignal<CatalogListState>, mode: ViewMode) -> &'static str {
    if state.with(|s| s.view_mode == mode) {
        "sidebar__view-button sidebar__view-button--active"
    } else {
        "sidebar__view-button"
    }
}

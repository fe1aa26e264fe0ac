use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::cart::service::use_cart;
use crate::domain::product::api::fetch_product_by_slug;
use crate::shared::format::format_price;

/// Страница товара: /product/:slug
#[component]
#[allow(non_snake_case)]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let product = RwSignal::new(None::<Product>);
    let is_loaded = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        is_loaded.set(false);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_product_by_slug(&slug).await {
                Ok(found) => product.set(found),
                Err(e) => {
                    log::error!("загрузка товара не удалась: {}", e);
                    error.set(Some(e));
                }
            }
            is_loaded.set(true);
        });
    });

    view! {
        <div class="product-page">
            <Show
                when=move || is_loaded.get()
                fallback=|| view! { <div class="product-page__loading"><p>"Загрузка..."</p></div> }
            >
                {move || {
                    if error.get().is_some() {
                        view! {
                            <div class="product-page__error">
                                <p>"Ошибка загрузки товара"</p>
                                <p class="product-page__hint">"Попробуйте обновить страницу"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        match product.get() {
                            Some(p) => view! { <ProductDetails product=p /> }.into_any(),
                            None => {
                                // «Не найдено» — штатное состояние, а не ошибка
                                view! {
                                    <div class="product-page__not-found">
                                        <h1>"Товар не найден"</h1>
                                        <p>
                                            "К сожалению, запрашиваемый товар не существует или был удалён"
                                        </p>
                                        <A href="/">"Вернуться в каталог"</A>
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductDetails(product: Product) -> impl IntoView {
    let cart = use_cart();
    let for_cart = product.clone();

    view! {
        <nav class="breadcrumbs">
            <A href="/">"Каталог"</A>
            {product
                .category
                .as_ref()
                .map(|c| view! { <span>" / "</span><span>{c.clone()}</span> })}
            <span>" / "</span>
            <span class="breadcrumbs__current">{product.name.clone()}</span>
        </nav>

        <div class="product-page__grid">
            <div class="product-page__image-box">
                {match &product.img {
                    Some(src) => view! {
                        <img class="product-page__image" src=src.clone() alt=product.name.clone() />
                    }
                        .into_any(),
                    None => view! { <div class="product-page__placeholder">"Нет фото"</div> }.into_any(),
                }}
            </div>

            <div class="product-page__details">
                <h1>{product.name.clone()}</h1>

                <div class="product-page__badges">
                    {product
                        .category
                        .as_ref()
                        .map(|c| view! { <span class="badge">{c.clone()}</span> })}
                    {product
                        .subcategory
                        .as_ref()
                        .map(|s| view! { <span class="badge badge--outline">{s.clone()}</span> })}
                    {product
                        .producer
                        .as_ref()
                        .map(|p| view! { <span class="badge badge--outline">{p.clone()}</span> })}
                </div>

                <div class="product-page__price">{format_price(product.price)}</div>

                {product
                    .description
                    .as_ref()
                    .map(|d| {
                        view! {
                            <div class="product-page__section">
                                <h3>"Описание"</h3>
                                <p>{d.clone()}</p>
                            </div>
                        }
                    })}

                {product
                    .in_box
                    .as_ref()
                    .map(|b| {
                        view! {
                            <div class="product-page__section">
                                <h3>"В упаковке"</h3>
                                <p>{b.clone()}</p>
                            </div>
                        }
                    })}

                <div class="product-page__actions">
                    <button class="button" on:click=move |_| cart.add(&for_cart)>
                        "В корзину"
                    </button>
                    <A href="/">"Вернуться в каталог"</A>
                </div>
            </div>
        </div>
    }
}

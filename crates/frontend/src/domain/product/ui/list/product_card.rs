use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::components::A;

use super::state::ViewMode;
use crate::domain::cart::service::use_cart;
use crate::shared::format::format_price;

/// Карточка товара в сетке каталога
#[component]
#[allow(non_snake_case)]
pub fn ProductCard(product: Product, view_mode: Signal<ViewMode>) -> impl IntoView {
    let cart = use_cart();
    let for_cart = product.clone();
    let href = format!("/product/{}", product.slug);

    view! {
        <article class=move || match view_mode.get() {
            ViewMode::Grid => "product-card",
            ViewMode::Compact => "product-card product-card--compact",
        }>
            <A href=href.clone() attr:class="product-card__link">
                {match &product.img {
                    Some(src) => view! {
                        <img class="product-card__image" src=src.clone() alt=product.name.clone() loading="lazy" />
                    }
                        .into_any(),
                    None => view! { <div class="product-card__placeholder">"Нет фото"</div> }.into_any(),
                }}
                <h3 class="product-card__name">{product.name.clone()}</h3>
            </A>

            {product
                .producer
                .as_ref()
                .map(|p| view! { <p class="product-card__producer">{p.clone()}</p> })}

            <div class="product-card__bottom">
                <span class="product-card__price">{format_price(product.price)}</span>
                <button
                    class="product-card__add"
                    on:click=move |_| cart.add(&for_cart)
                >
                    "В корзину"
                </button>
            </div>
        </article>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

use super::service::{order_message, use_cart};
use crate::config::site::whatsapp_link;
use crate::shared::format::format_price;

/// Страница корзины с передачей заказа в WhatsApp
#[component]
#[allow(non_snake_case)]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    let checkout = move |_| {
        let message = cart.cart().with_untracked(|c| order_message(c));
        let link = whatsapp_link(&message);
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&link, "_blank");
        }
    };

    let clear = move |_| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Очистить корзину?").unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            cart.clear();
        }
    };

    view! {
        <div class="cart">
            <h1>"Корзина"</h1>

            <Show
                when=move || !cart.cart().with(|c| c.is_empty())
                fallback=|| {
                    view! {
                        <div class="cart__empty">
                            <p>"Ваша корзина пуста"</p>
                            <A href="/">"Перейти в каталог"</A>
                        </div>
                    }
                }
            >
                <ul class="cart__list">
                    <For
                        each=move || cart.cart().get().items().to_vec()
                        key=|item| (item.product_id.clone(), item.quantity)
                        children=move |item| {
                            let id_minus = item.product_id.clone();
                            let id_plus = item.product_id.clone();
                            let id_remove = item.product_id.clone();
                            let quantity = item.quantity;
                            view! {
                                <li class="cart__row">
                                    {match &item.img {
                                        Some(src) => view! {
                                            <img class="cart__thumb" src=src.clone() alt=item.name.clone() />
                                        }
                                            .into_any(),
                                        None => view! { <div class="cart__thumb cart__thumb--empty"></div> }.into_any(),
                                    }}
                                    <span class="cart__name">{item.name.clone()}</span>
                                    <span class="cart__price">{format_price(item.price)}</span>
                                    <div class="cart__quantity">
                                        <button on:click=move |_| {
                                            cart.set_quantity(&id_minus, quantity.saturating_sub(1));
                                        }>"−"</button>
                                        <span>{quantity}</span>
                                        <button on:click=move |_| {
                                            cart.set_quantity(&id_plus, quantity + 1);
                                        }>"+"</button>
                                    </div>
                                    <span class="cart__line-total">
                                        {match item.line_total() {
                                            Some(total) => format_price(Some(total)),
                                            None => "—".to_string(),
                                        }}
                                    </span>
                                    <button
                                        class="cart__remove"
                                        on:click=move |_| cart.remove(&id_remove)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>

                <div class="cart__summary">
                    <span>
                        {move || {
                            format!("Товаров: {}", cart.cart().with(|c| c.total_count()))
                        }}
                    </span>
                    <span class="cart__total">
                        {move || {
                            format!(
                                "Итого: {}",
                                format_price(Some(cart.cart().with(|c| c.total_amount())))
                            )
                        }}
                    </span>
                </div>

                <div class="cart__actions">
                    <button class="button" on:click=checkout>
                        "Оформить в WhatsApp"
                    </button>
                    <button class="button button--ghost" on:click=clear>
                        "Очистить корзину"
                    </button>
                </div>
            </Show>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::site::{company, contacts, phone_link};
use crate::domain::cart::service::use_cart;

#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let cart = use_cart();
    let navigate = use_navigate();
    let (search_text, set_search_text) = signal(String::new());

    let submit_search = move || {
        let q = search_text.get_untracked();
        let q = q.trim();
        if q.is_empty() {
            navigate("/", Default::default());
        } else {
            navigate(
                &format!("/?search={}", urlencoding::encode(q)),
                Default::default(),
            );
        }
    };
    let submit_on_click = submit_search.clone();

    view! {
        <header class="header">
            <div class="header__top">
                <A href="/" attr:class="header__brand">
                    <span class="header__name">{company::NAME}</span>
                    <span class="header__slogan">{company::SLOGAN}</span>
                </A>

                <div class="header__search">
                    <input
                        type="text"
                        placeholder="Поиск товаров..."
                        prop:value=search_text
                        on:input=move |ev| set_search_text.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit_search();
                            }
                        }
                    />
                    <button on:click=move |_| submit_on_click()>"Найти"</button>
                </div>

                <div class="header__contacts">
                    <a href=phone_link()>{contacts::PHONE}</a>
                    <span class="header__hours">{contacts::WORKING_HOURS}</span>
                </div>

                <A href="/cart" attr:class="header__cart">
                    "Корзина"
                    <Show when={move || cart.total_count() > 0}>
                        <span class="header__cart-badge">{move || cart.total_count()}</span>
                    </Show>
                </A>
            </div>

            <nav class="header__nav">
                <A href="/">"Каталог"</A>
                <A href="/payment">"Оплата"</A>
                <A href="/delivery">"Доставка"</A>
                <A href="/about">"О компании"</A>
            </nav>
        </header>
    }
}

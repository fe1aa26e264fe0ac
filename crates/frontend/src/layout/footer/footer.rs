use leptos::prelude::*;

use crate::config::site::{company, contacts, phone_link};

#[component]
#[allow(non_snake_case)]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__about">
                <span class="footer__name">{company::NAME}</span>
                <p>{company::DESCRIPTION}</p>
            </div>
            <div class="footer__contacts">
                <a href=phone_link()>{contacts::PHONE}</a>
                <a href=format!("mailto:{}", contacts::EMAIL)>{contacts::EMAIL}</a>
                <span>{contacts::ADDRESS}</span>
                <span>{contacts::WORKING_HOURS}</span>
            </div>
        </footer>
    }
}

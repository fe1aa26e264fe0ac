use leptos::prelude::*;

use crate::config::site::{company, contacts};

#[component]
#[allow(non_snake_case)]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"О компании"</h1>
            <p>{company::DESCRIPTION}</p>
            <p>
                "Мы работаем в городе " {contacts::CITY}
                " и отгружаем товар оптовыми партиями со склада."
            </p>
            <ul>
                <li>"Телефон: " {contacts::PHONE}</li>
                <li>"Почта: " {contacts::EMAIL}</li>
                <li>"Режим работы: " {contacts::WORKING_HOURS}</li>
            </ul>
        </div>
    }
}

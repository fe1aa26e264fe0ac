use leptos::prelude::*;

use crate::config::site::delivery;
use crate::shared::format::format_number;

#[component]
#[allow(non_snake_case)]
pub fn DeliveryPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"Доставка"</h1>
            <ul>
                <li>"Зона доставки: " {delivery::ZONE}</li>
                <li>"Срок доставки: " {delivery::TIME}</li>
                <li>
                    "Бесплатная доставка при заказе от "
                    {format_number(delivery::FREE_FROM as i64)} " " {delivery::CURRENCY}
                </li>
            </ul>
            <p>
                "Заказы на меньшую сумму доставляются по тарифам службы доставки, "
                "стоимость согласовывается при подтверждении заказа."
            </p>
        </div>
    }
}

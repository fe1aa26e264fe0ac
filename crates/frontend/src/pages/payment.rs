use leptos::prelude::*;

use crate::config::site::contacts;

#[component]
#[allow(non_snake_case)]
pub fn PaymentPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"Оплата"</h1>
            <p>"Принимаем оплату наличными при получении, переводом и по счёту для юридических лиц."</p>
            <p>
                "Заказ подтверждается менеджером в WhatsApp или по телефону "
                {contacts::PHONE} ", после чего согласовывается способ оплаты."
            </p>
        </div>
    }
}

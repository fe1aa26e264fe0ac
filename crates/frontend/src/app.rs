use leptos::prelude::*;

use crate::domain::cart::service::CartService;
use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    // Корзина доступна всему приложению через контекст
    provide_context(CartService::new());

    view! {
        <AppRoutes />
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::cart::ui::CartPage;
use crate::domain::product::ui::details::ProductDetailsPage;
use crate::domain::product::ui::list::CatalogPage;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::pages::about::AboutPage;
use crate::pages::delivery::DeliveryPage;
use crate::pages::payment::PaymentPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <div class="page">
                <Header />
                <main class="page__main">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=CatalogPage />
                        <Route path=path!("/product/:slug") view=ProductDetailsPage />
                        <Route path=path!("/cart") view=CartPage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/delivery") view=DeliveryPage />
                        <Route path=path!("/payment") view=PaymentPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"Страница не найдена"</h1>
            <a href="/">"Вернуться в каталог"</a>
        </div>
    }
}

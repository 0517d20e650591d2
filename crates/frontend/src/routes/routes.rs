use crate::domain::a001_name::ui::category_page::CategoryPage;
use crate::domain::a002_category::ui::browse::BrowsePage;
use crate::domain::a002_category::ui::home::HomePage;
use crate::layout::Shell;
use crate::usecases::u501_generate_names::GenerateNamesView;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="page-title">"Page not found"</h1>
            <a href="/">"Back to the home page"</a>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/browse") view=BrowsePage />
                    <Route path=path!("/names/:category") view=CategoryPage />
                    <Route path=path!("/generate") view=GenerateNamesView />
                </Routes>
            </Shell>
        </Router>
    }
}

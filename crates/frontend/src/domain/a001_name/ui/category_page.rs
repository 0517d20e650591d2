use super::list::NameList;
use contracts::domain::a002_category::query::CategoryQuery;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// `/names/:category`
#[component]
#[allow(non_snake_case)]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category = Memo::new(move |_| {
        params.with(|p| p.get("category").and_then(|slug| CategoryQuery::from_slug(&slug)))
    });

    view! {
        <section class="category-page">
            <h1 class="page-title">
                {move || category.get().map(|c| c.to_string()).unwrap_or_default()}
            </h1>
            <p class="page-subtitle">"Click any name to copy it and add it to your saved list."</p>
            <NameList category={Signal::<Option<CategoryQuery>>::from(category)} />
        </section>
    }
}

use crate::domain::a002_category::api;
use contracts::domain::a002_category::aggregate::CategoryGroup;
use contracts::domain::a002_category::query::slugify;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let (groups, set_groups) = signal::<Option<Vec<CategoryGroup>>>(None);

    spawn_local(async move {
        set_groups.set(Some(api::list_categories_or_fallback().await));
    });

    view! {
        <section class="home-page">
            <h1 class="page-title">"Fantasy Name Generator"</h1>
            <p class="page-subtitle">
                "Pick a category to browse curated names, or let the generator invent new ones."
            </p>
            <A href="/generate" attr:class="cta-link">"Try the AI generator"</A>
            {move || match groups.get() {
                None => view! { <div class="loading">"Loading categories..."</div> }.into_any(),
                Some(groups) if groups.is_empty() => view! {
                    <p class="empty-state">
                        "No categories yet. Browse the full catalog instead."
                        " "
                        <A href="/browse">"Browse"</A>
                    </p>
                }
                .into_any(),
                Some(groups) => view! {
                    <div class="category-groups">
                        {groups.into_iter().map(category_card).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

fn category_card(group: CategoryGroup) -> impl IntoView {
    view! {
        <div class="category-card">
            <h2>{group.category}</h2>
            <ul>
                {group
                    .subcategories
                    .into_iter()
                    .map(|sub| {
                        let href = format!("/names/{}", slugify(&sub));
                        view! {
                            <li>
                                <A href=href>{sub}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

use contracts::domain::a002_category::browse::{BrowseSection, BROWSE_SECTIONS};
use contracts::domain::a002_category::query::slugify;
use leptos::prelude::*;
use leptos_router::components::A;

/// `/browse`: fixed catalog of sections
#[component]
#[allow(non_snake_case)]
pub fn BrowsePage() -> impl IntoView {
    view! {
        <section class="browse-page">
            <h1 class="page-title">"Browse All Categories"</h1>
            <div class="browse-sections">
                {BROWSE_SECTIONS.iter().map(section_card).collect_view()}
            </div>
        </section>
    }
}

fn section_card(section: &'static BrowseSection) -> impl IntoView {
    view! {
        <div class="browse-section">
            <h2>
                <span class="browse-icon">{section.icon}</span>
                " "
                {section.title}
            </h2>
            <p>{section.description}</p>
            <ul>
                {section
                    .links
                    .iter()
                    .map(|label| {
                        let href = format!("/names/{}", slugify(label));
                        view! {
                            <li>
                                <A href=href>{*label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

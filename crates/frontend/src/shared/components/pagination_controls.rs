use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// PaginationControls component - "Previous / Page X of Y / Next"
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || current_page.get() <= 1)
                on_click=move |_| on_prev.run(())
            >
                "Previous"
            </Button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || current_page.get() >= total_pages.get())
                on_click=move |_| on_next.run(())
            >
                "Next"
            </Button>
        </div>
    }
}

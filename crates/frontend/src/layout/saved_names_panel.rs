use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::saved_names::use_saved_names;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Panel under every page with the names saved in this browser
#[component]
pub fn SavedNamesPanel() -> impl IntoView {
    let saved_names = use_saved_names();
    let names = saved_names.names();

    view! {
        <section id="saved-names" class="saved-names">
            <div class="saved-names__header">
                <h2>{move || format!("Saved Names ({})", names.with(|n| n.len()))}</h2>
                <Show when=move || names.with(|n| !n.is_empty())>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| saved_names.clear()
                    >
                        "Clear All"
                    </Button>
                </Show>
            </div>
            {move || {
                let list = names.get();
                if list.is_empty() {
                    return view! {
                        <p class="saved-names__empty">
                            "No saved names yet. Click on names above to copy and save them here."
                        </p>
                    }
                    .into_any();
                }
                view! {
                    <div class="saved-names__chips">
                        {list
                            .into_iter()
                            .map(|name| {
                                let copy_name = name.clone();
                                let remove_name = name.clone();
                                view! {
                                    <span class="saved-chip">
                                        <span class="saved-chip__name">{name}</span>
                                        <button
                                            class="saved-chip__copy"
                                            on:click=move |_| copy_to_clipboard_with_callback(&copy_name, || {})
                                        >
                                            "Copy"
                                        </button>
                                        <button
                                            class="saved-chip__remove"
                                            aria-label="Remove"
                                            on:click=move |_| {
                                                saved_names.remove(&remove_name);
                                            }
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

pub mod state;

use self::state::create_state;
use crate::domain::a001_name::api;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::saved_names::use_saved_names;
use contracts::domain::a002_category::query::CategoryQuery;
use contracts::shared::name_filter::GenderFilter;
use contracts::shared::pagination::PAGE_SIZE;
use contracts::shared::request_sequencer::RequestSequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// How long the "Copied!" badge stays on a card
const COPIED_BADGE_MS: u32 = 2000;

#[component]
#[allow(non_snake_case)]
pub fn NameList(
    /// `None` keeps the list in its loading state without issuing a request
    #[prop(into)]
    category: Signal<Option<CategoryQuery>>,
) -> impl IntoView {
    let saved_names = use_saved_names();
    let state = create_state();
    let sequencer = StoredValue::new(RequestSequencer::new());
    let (copied, set_copied) = signal::<Option<String>>(None);

    // each category change issues a new ticket; stale responses are dropped
    Effect::new(move |_| {
        let Some(query) = category.get() else {
            sequencer.with_value(|s| s.cancel());
            state.update(|s| s.begin_loading());
            return;
        };
        let ticket = sequencer.with_value(|s| s.issue());
        state.update(|s| s.begin_loading());
        spawn_local(async move {
            let names = api::fetch_names(query.as_str()).await;
            if sequencer.with_value(|s| s.is_current(ticket)) {
                state.update(|s| s.set_names(names));
            } else {
                log::debug!("dropping stale names response for '{}'", query);
            }
        });
    });

    let pick_name = move |name: String| {
        saved_names.save(&name);
        let badge = name.clone();
        copy_to_clipboard_with_callback(&name, move || {
            set_copied.set(Some(badge.clone()));
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(COPIED_BADGE_MS).await;
                set_copied.update(|c| {
                    if c.as_deref() == Some(badge.as_str()) {
                        *c = None;
                    }
                });
            });
        });
    };

    let tabs = GenderFilter::all()
        .into_iter()
        .map(|filter| {
            view! {
                <Button
                    size=ButtonSize::Medium
                    appearance=move || {
                        if state.with(|s| s.filter() == filter) {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        }
                    }
                    on_click=move |_| {
                        state.update(|s| {
                            s.set_filter(filter);
                        });
                    }
                >
                    {filter.label()}
                </Button>
            }
        })
        .collect_view();

    let grid = move || {
        if state.with(|s| s.is_loading()) {
            return view! {
                <div class="names-grid">
                    {(0..PAGE_SIZE)
                        .map(|_| view! { <div class="name-card skeleton"></div> })
                        .collect_view()}
                </div>
            }
            .into_any();
        }

        let page = state.with(|s| s.visible());
        if page.items.is_empty() {
            return view! {
                <div class="empty-state">
                    "No names found for this category and gender filter."
                </div>
            }
            .into_any();
        }

        view! {
            <div class="names-grid">
                {page
                    .items
                    .into_iter()
                    .map(|record| {
                        let title = record.details().unwrap_or_default();
                        let name = record.name;
                        let click_name = name.clone();
                        let badge_name = name.clone();
                        view! {
                            <button
                                class="name-card"
                                title=title
                                on:click=move |_| pick_name(click_name.clone())
                            >
                                <span class="name-text">{name}</span>
                                <Show when=move || {
                                    copied.with(|c| c.as_deref() == Some(badge_name.as_str()))
                                }>
                                    <span class="copied-badge">"Copied!"</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="name-list">
            <div class="gender-tabs">{tabs}</div>
            {grid}
            <Show when=move || state.with(|s| !s.is_loading() && s.total_pages() > 1)>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page()))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    on_prev=Callback::new(move |_| {
                        state.update(|s| {
                            s.prev_page();
                        })
                    })
                    on_next=Callback::new(move |_| {
                        state.update(|s| {
                            s.next_page();
                        })
                    })
                />
            </Show>
        </div>
    }
}

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::saved_names::use_saved_names;
use contracts::usecases::u501_generate_names::dto::{
    GenerateNamesRequest, WordCount, ANY_STYLE, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT, NAME_STYLES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Select value that reveals the free-text style field
const CUSTOM_STYLE: &str = "custom";

#[component]
#[allow(non_snake_case)]
pub fn GenerateNamesView() -> impl IntoView {
    let saved_names = use_saved_names();

    // request fields
    let criteria = RwSignal::new(String::new());
    let word_count = RwSignal::new(WordCount::Any);
    let count = RwSignal::new(DEFAULT_COUNT);
    let name_style = RwSignal::new(ANY_STYLE.to_string());
    let custom_style = RwSignal::new(String::new());

    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (results, set_results) = signal(Vec::<String>::new());
    let (copied, set_copied) = signal(Option::<String>::None);

    let build_request = move || {
        let style = name_style.get_untracked();
        GenerateNamesRequest {
            criteria: criteria.get_untracked(),
            count: count.get_untracked(),
            word_count: word_count.get_untracked(),
            name_style: if style == CUSTOM_STYLE {
                custom_style.get_untracked()
            } else {
                style
            },
        }
        .normalized()
    };

    let generate = move |_: leptos::ev::MouseEvent| {
        let request = build_request();
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e));
            return;
        }
        set_error_message.set(None);
        set_results.set(Vec::new());
        set_is_loading.set(true);

        spawn_local(async move {
            match super::api::generate_names(&request).await {
                Ok(names) => set_results.set(names),
                Err(e) => {
                    log::warn!("generate names failed: {}", e);
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    let pick_name = move |name: String| {
        saved_names.save(&name);
        let badge = name.clone();
        copy_to_clipboard_with_callback(&name, move || {
            set_copied.set(Some(badge.clone()));
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1500).await;
                set_copied.update(|c| {
                    if c.as_deref() == Some(badge.as_str()) {
                        *c = None;
                    }
                });
            });
        });
    };

    view! {
        <section class="generate-page">
            <h1 class="page-title">"AI Name Generator"</h1>
            <p class="page-subtitle">"Describe what you need and get fresh, unique names."</p>

            <div class="generate-form">
                <label for="criteria" class="form-label">"What kind of names do you need?"</label>
                <textarea
                    id="criteria"
                    rows="4"
                    placeholder="e.g., Mysterious elven names for a forest guardian, Strong dwarven names for a blacksmith..."
                    prop:value=move || criteria.get()
                    on:input=move |ev| criteria.set(event_target_value(&ev))
                ></textarea>

                <div class="form-row">
                    <div class="form-field">
                        <label for="wordCount" class="form-label">"Words per name"</label>
                        <select
                            id="wordCount"
                            prop:value=move || word_count.get().as_value()
                            on:change=move |ev| {
                                if let Some(wc) = WordCount::from_value(&event_target_value(&ev)) {
                                    word_count.set(wc);
                                }
                            }
                        >
                            {WordCount::all()
                                .into_iter()
                                .map(|wc| view! { <option value=wc.as_value()>{wc.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-field">
                        <label for="count" class="form-label">"Number of names"</label>
                        <input
                            id="count"
                            type="number"
                            min=MIN_COUNT.to_string()
                            max=MAX_COUNT.to_string()
                            prop:value=move || count.get().to_string()
                            on:change=move |ev| {
                                count.set(GenerateNamesRequest::clamp_count(&event_target_value(&ev)))
                            }
                        />
                    </div>

                    <div class="form-field">
                        <label for="nameStyle" class="form-label">"Style"</label>
                        <select
                            id="nameStyle"
                            prop:value=move || name_style.get()
                            on:change=move |ev| name_style.set(event_target_value(&ev))
                        >
                            {NAME_STYLES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                            <option value=CUSTOM_STYLE>"Custom Style..."</option>
                        </select>
                    </div>
                </div>

                <Show when=move || name_style.get() == CUSTOM_STYLE>
                    <div class="form-field">
                        <label for="customStyle" class="form-label">"Custom Style Description"</label>
                        <input
                            id="customStyle"
                            type="text"
                            placeholder="e.g., names that sound ancient and mysterious"
                            prop:value=move || custom_style.get()
                            on:input=move |ev| custom_style.set(event_target_value(&ev))
                        />
                    </div>
                </Show>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || is_loading.get())
                    on_click=generate
                >
                    {move || if is_loading.get() { "Generating..." } else { "Generate Names" }}
                </Button>
            </div>

            {move || error_message.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || !results.with(|r| r.is_empty())>
                <h2 class="results-title">"Generated Names"</h2>
                <div class="names-grid">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|name| {
                                let click_name = name.clone();
                                let badge_name = name.clone();
                                view! {
                                    <button
                                        class="name-card"
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
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}

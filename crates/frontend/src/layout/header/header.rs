use crate::shared::saved_names::use_saved_names;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let saved_names = use_saved_names();

    // Собственная подписка: счётчик не зависит от панели сохранённых имён
    let saved_count = RwSignal::new(saved_names.reload().len());
    let subscription = saved_names.subscribe(move |names: &[String]| saved_count.set(names.len()));
    on_cleanup(move || saved_names.unsubscribe(subscription));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"Fantasy Names"</A>
                <nav class="header__nav">
                    <A href="/">"Home"</A>
                    <A href="/browse">"Browse"</A>
                    <A href="/generate">"AI Generator"</A>
                </nav>
            </div>
            <div class="header__actions">
                <a href="#saved-names" class="saved-counter" title="Saved names">
                    "★ " {move || saved_count.get()}
                </a>
            </div>
        </header>
    }
}

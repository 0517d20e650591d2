use crate::routes::routes::AppRoutes;
use crate::shared::saved_names::SavedNamesContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One saved-names store for the whole app; every view subscribes to it.
    let saved_names = SavedNamesContext::new();
    provide_context(saved_names);

    // Another tab wrote to localStorage: re-read and notify the same store.
    let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
        saved_names.handle_external_change(ev.key().as_deref());
    });
    on_cleanup(move || handle.remove());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

pub mod header;
pub mod saved_names_panel;

use header::header::Header;
use leptos::prelude::*;
use saved_names_panel::SavedNamesPanel;

/// Page frame: header, routed content, saved names, footer.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <SavedNamesPanel />
            <footer class="footer">
                <span>"Fantasy Names"</span>
            </footer>
        </div>
    }
}

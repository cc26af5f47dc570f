pub mod header;
pub mod sidebar;

use header::Header;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Application chrome: fixed sidebar on the left, header plus routed page
/// content on the right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Header />
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

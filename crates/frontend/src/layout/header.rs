use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::storage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let logout = move |_| {
        storage::clear_session();
        set_auth_state.set(Default::default());
    };

    view! {
        <header class="header">
            <div class="header__spacer"></div>
            <div class="header__user">
                <span class="header__user-name">{user_name}</span>
                <Button appearance=ButtonAppearance::Subtle on_click=logout attr:title="Sign out">
                    {icon("logout")}
                </Button>
            </div>
        </header>
    }
}

use crate::domain::order::ui::{OrderDetailsPage, OrdersListPage};
use crate::domain::party::ui::{PartiesListPage, PartyDetailsPage};
use crate::domain::staff::ui::{AttendancePage, StaffDetailsPage, StaffListPage};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Route table behind the auth gate. Everything except the login page
/// requires a signed-in user.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Router>
                <Shell>
                    <Routes fallback=|| view! { <p class="page__empty">"Page not found"</p> }>
                        <Route path=path!("/") view=OrdersListPage />
                        <Route path=path!("/orders") view=OrdersListPage />
                        <Route path=path!("/orders/create") view=OrderDetailsPage />
                        <Route path=path!("/orders/edit/:id") view=OrderDetailsPage />
                        <Route path=path!("/parties") view=PartiesListPage />
                        <Route path=path!("/parties/create") view=PartyDetailsPage />
                        <Route path=path!("/parties/edit/:id") view=PartyDetailsPage />
                        <Route path=path!("/staff") view=StaffListPage />
                        <Route path=path!("/staff/create") view=StaffDetailsPage />
                        <Route path=path!("/staff/edit/:id") view=StaffDetailsPage />
                        <Route path=path!("/staff/attendance/:id") view=AttendancePage />
                    </Routes>
                </Shell>
            </Router>
        </Show>
    }
}

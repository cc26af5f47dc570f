use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("diamond")}
                <span>"Diamond Desk"</span>
            </div>
            <nav class="sidebar__nav">
                <A href="/orders" attr:class="sidebar__link">
                    {icon("orders")}
                    <span>"Orders"</span>
                </A>
                <A href="/parties" attr:class="sidebar__link">
                    {icon("parties")}
                    <span>"Parties"</span>
                </A>
                <A href="/staff" attr:class="sidebar__link">
                    {icon("staff")}
                    <span>"Staff"</span>
                </A>
            </nav>
        </aside>
    }
}

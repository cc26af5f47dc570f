use contracts::domain::order::aggregate::Status;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<Status>) -> impl IntoView {
    let class = move || match status.get() {
        Status::Pending => "badge badge--neutral",
        Status::Started => "badge badge--info",
        Status::Completed => "badge badge--success",
        Status::Cancelled => "badge badge--error",
        Status::OnHold => "badge badge--warning",
    };

    view! { <span class=class>{move || status.get().label()}</span> }
}

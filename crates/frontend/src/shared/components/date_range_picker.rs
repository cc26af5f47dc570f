use crate::shared::icons::icon;
use leptos::prelude::*;

fn normalize(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// From/to date filter. Either side may stay empty; an empty side means
/// "unbounded".
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<Option<String>>,
    #[prop(into)] date_to: Signal<Option<String>>,
    on_change: Callback<(Option<String>, Option<String>)>,
) -> impl IntoView {
    let has_range = move || date_from.get().is_some() || date_to.get().is_some();

    view! {
        <div class="date-range">
            <input
                type="date"
                class="date-range__input"
                prop:value=move || date_from.get().unwrap_or_default()
                on:change=move |ev| {
                    on_change.run((normalize(event_target_value(&ev)), date_to.get_untracked()));
                }
            />
            <span class="date-range__separator">"–"</span>
            <input
                type="date"
                class="date-range__input"
                prop:value=move || date_to.get().unwrap_or_default()
                on:change=move |ev| {
                    on_change.run((date_from.get_untracked(), normalize(event_target_value(&ev))));
                }
            />
            <Show when=has_range>
                <button
                    class="date-range__clear"
                    title="Clear dates"
                    on:click=move |_| on_change.run((None, None))
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

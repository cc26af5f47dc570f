use crate::shared::icons::icon;
use crate::shared::list_query::{DebounceGate, SEARCH_DEBOUNCE_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Debounced search box. `on_commit` fires once per pause in typing
/// (trailing edge), never per keystroke.
#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    on_commit: Callback<String>,
) -> impl IntoView {
    let raw = RwSignal::new(String::new());
    let gate = StoredValue::new(DebounceGate::default());

    let arm = move || {
        let mut g = gate.get_value();
        let ticket = g.arm();
        gate.set_value(g);
        ticket
    };

    let schedule = move |value: String| {
        let ticket = arm();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // A later keystroke re-armed the gate: drop this commit
            if gate.get_value().is_live(ticket) {
                on_commit.run(value);
            }
        });
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || raw.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    raw.set(value.clone());
                    schedule(value);
                }
            />
            <Show when=move || !raw.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear search"
                    on:click=move |_| {
                        // Clearing commits immediately, cancelling any
                        // pending debounce
                        arm();
                        raw.set(String::new());
                        on_commit.run(String::new());
                    }
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

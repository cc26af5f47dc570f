use leptos::prelude::*;
use thaw::*;

/// Modal confirmation for destructive actions. Nothing is deleted without
/// going through this.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    /// Disables both buttons while the action is running
    #[prop(into)]
    busy: Signal<bool>,
    #[prop(into, optional)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());
    let confirm_label = StoredValue::new(confirm_label);

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal modal--confirm" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{move || message.get()}</p>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                            disabled=Signal::derive(move || busy.get())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=Signal::derive(move || busy.get())
                        >
                            {move || {
                                if busy.get() {
                                    "Working...".to_string()
                                } else {
                                    confirm_label.get_value()
                                }
                            }}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

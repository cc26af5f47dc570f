use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

/// First validation message recorded for a field path, or nothing
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<ValidationErrors>,
    #[prop(into)] path: String,
) -> impl IntoView {
    let path = StoredValue::new(path);

    view! {
        {move || {
            errors
                .get()
                .first_for(&path.get_value())
                .map(|message| message.to_string())
                .map(|message| view! { <span class="field-error">{message}</span> })
        }}
    }
}

use super::view_model::StaffDetailsViewModel;
use contracts::domain::staff::aggregate::Gender;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::shared::components::field_error::FieldError;
use crate::shared::icons::icon;

#[component]
pub fn StaffDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id: Option<i64> = params.with_untracked(|p| p.get("id").and_then(|v| v.parse().ok()));

    let vm = StaffDetailsViewModel::new();
    vm.load(id);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if vm.saved.get() {
            navigate("/staff", Default::default());
        }
    });
    let cancel = use_navigate();

    view! {
        <div class="page page--details">
            <div class="page__header">
                <h1 class="page__title">
                    {move || if vm.is_edit_mode() { "Edit Staff Member" } else { "New Staff Member" }}
                </h1>
            </div>

            {move || vm.notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <p class="page__empty">"Loading..."</p> }>
                <div class="details-form">
                    <div class="form__row">
                        <div class="form__group">
                            <label>"First name"</label>
                            <input
                                type="text"
                                prop:value=move || vm.form.with(|f| f.first_name.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.first_name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="first_name" />
                        </div>

                        <div class="form__group">
                            <label>"Last name"</label>
                            <input
                                type="text"
                                prop:value=move || vm.form.with(|f| f.last_name.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.last_name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="last_name" />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label>"Gender"</label>
                            <select on:change=move |ev| {
                                vm.form.update(|f| f.gender = event_target_value(&ev));
                            }>
                                <option value="" selected=move || vm.form.with(|f| f.gender.is_empty())>
                                    "Select gender"
                                </option>
                                {Gender::ALL
                                    .iter()
                                    .map(|gender| {
                                        let value = gender.as_str();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || vm.form.with(|f| f.gender == value)
                                            >
                                                {gender.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            <FieldError errors=vm.errors path="gender" />
                        </div>

                        <div class="form__group">
                            <label>"Age"</label>
                            <input
                                type="number"
                                min="18"
                                prop:value=move || {
                                    vm.form.with(|f| f.age.map(|a| a.to_string()).unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.age = value.parse().ok());
                                }
                            />
                            <FieldError errors=vm.errors path="age" />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label>"Primary phone"</label>
                            <input
                                type="tel"
                                maxlength="10"
                                prop:value=move || vm.form.with(|f| f.primary_phone.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.primary_phone = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="primary_phone" />
                        </div>

                        <div class="form__group">
                            <label>"Secondary phone"</label>
                            <input
                                type="tel"
                                maxlength="10"
                                prop:value=move || vm.form.with(|f| f.secondary_phone.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.secondary_phone = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="secondary_phone" />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group form__group--wide">
                            <label>"Address"</label>
                            <input
                                type="text"
                                prop:value=move || vm.form.with(|f| f.address.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.address = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="address" />
                        </div>
                    </div>

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save()
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {icon("save")}
                            {move || {
                                if vm.saving.get() {
                                    " Saving..."
                                } else if vm.is_edit_mode() {
                                    " Save"
                                } else {
                                    " Create"
                                }
                            }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click={
                                let cancel = cancel.clone();
                                move |_| cancel("/staff", Default::default())
                            }
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

use super::view_model::PartyDetailsViewModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::shared::components::field_error::FieldError;
use crate::shared::icons::icon;

#[component]
pub fn PartyDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id: Option<i64> = params.with_untracked(|p| p.get("id").and_then(|v| v.parse().ok()));

    let vm = PartyDetailsViewModel::new();
    vm.load(id);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if vm.saved.get() {
            navigate("/parties", Default::default());
        }
    });
    let cancel = use_navigate();

    view! {
        <div class="page page--details">
            <div class="page__header">
                <h1 class="page__title">
                    {move || if vm.is_edit_mode() { "Edit Party" } else { "New Party" }}
                </h1>
            </div>

            {move || vm.notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <p class="page__empty">"Loading..."</p> }>
                <div class="details-form">
                    <div class="form__row">
                        <div class="form__group">
                            <label>"Name"</label>
                            <input
                                type="text"
                                prop:value=move || vm.form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="name" />
                        </div>

                        <div class="form__group">
                            <label>"Email"</label>
                            <input
                                type="email"
                                prop:value=move || vm.form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.email = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="email" />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label>"Personal phone"</label>
                            <input
                                type="tel"
                                prop:value=move || vm.form.with(|f| f.personal_phone.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.personal_phone = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="personal_phone" />
                        </div>

                        <div class="form__group">
                            <label>"Office phone"</label>
                            <input
                                type="tel"
                                prop:value=move || vm.form.with(|f| f.office_phone.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.office_phone = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="office_phone" />
                        </div>

                        <div class="form__group">
                            <label>"GSTIN (optional)"</label>
                            <input
                                type="text"
                                prop:value=move || vm.form.with(|f| f.gstin_no.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.gstin_no = event_target_value(&ev));
                                }
                                placeholder="22AAAAA0000A1Z5"
                            />
                            <FieldError errors=vm.errors path="gstin_no" />
                        </div>
                    </div>

                    <div class="form-section">
                        <div class="form-section__header">
                            <h2>"Addresses"</h2>
                            <FieldError errors=vm.errors path="party_addresses" />
                        </div>

                        {move || {
                            let count = vm.form.with(|f| f.party_addresses.len());
                            (0..count)
                                .map(|index| view! { <AddressRow vm=vm index=index /> })
                                .collect_view()
                        }}

                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_address()>
                            {icon("plus")}
                            " Add Another Address"
                        </Button>
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
                                move |_| cancel("/parties", Default::default())
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

#[component]
fn AddressRow(vm: PartyDetailsViewModel, index: usize) -> impl IntoView {
    let path = move |field: &str| format!("party_addresses.{index}.{field}");

    view! {
        <div class="address-card">
            <div class="address-card__header">
                <h3>{format!("Address #{}", index + 1)}</h3>
                <button
                    class="btn-icon btn-icon--danger"
                    title="Remove address"
                    disabled=move || !vm.can_remove_address()
                    on:click=move |_| vm.remove_address(index)
                >
                    {icon("trash")}
                </button>
            </div>

            <div class="form__row">
                <div class="form__group form__group--wide">
                    <label>"Address"</label>
                    <input
                        type="text"
                        prop:value=move || {
                            vm.form.with(|f| {
                                f.party_addresses
                                    .get(index)
                                    .map(|a| a.address.clone())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(address) = f.party_addresses.get_mut(index) {
                                    address.address = value;
                                }
                            });
                        }
                    />
                    <FieldError errors=vm.errors path=path("address") />
                </div>

                <div class="form__group">
                    <label>"Landmark"</label>
                    <input
                        type="text"
                        prop:value=move || {
                            vm.form.with(|f| {
                                f.party_addresses
                                    .get(index)
                                    .map(|a| a.landmark.clone())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(address) = f.party_addresses.get_mut(index) {
                                    address.landmark = value;
                                }
                            });
                        }
                    />
                    <FieldError errors=vm.errors path=path("landmark") />
                </div>

                <div class="form__group">
                    <label>"Pincode"</label>
                    <input
                        type="text"
                        maxlength="6"
                        prop:value=move || {
                            vm.form.with(|f| {
                                f.party_addresses
                                    .get(index)
                                    .map(|a| a.pincode.clone())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(address) = f.party_addresses.get_mut(index) {
                                    address.pincode = value;
                                }
                            });
                        }
                    />
                    <FieldError errors=vm.errors path=path("pincode") />
                </div>
            </div>
        </div>
    }
}

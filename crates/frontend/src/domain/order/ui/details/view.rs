use super::view_model::OrderDetailsViewModel;
use contracts::domain::order::aggregate::Status;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::shared::components::field_error::FieldError;
use crate::shared::date_utils::to_input_datetime;
use crate::shared::icons::icon;

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id: Option<i64> = params.with_untracked(|p| p.get("id").and_then(|v| v.parse().ok()));

    let vm = OrderDetailsViewModel::new();
    vm.load(id);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if vm.saved.get() {
            navigate("/orders", Default::default());
        }
    });
    let cancel = use_navigate();

    view! {
        <div class="page page--details">
            <div class="page__header">
                <h1 class="page__title">
                    {move || if vm.is_edit_mode() { "Edit Order" } else { "New Order" }}
                </h1>
            </div>

            {move || vm.notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <p class="page__empty">"Loading..."</p> }>
                <div class="details-form">
                    <div class="form__row">
                        <div class="form__group">
                            <label>"Party"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.party_id = value.parse().ok());
                            }>
                                <option value="" selected=move || vm.form.with(|f| f.party_id.is_none())>
                                    "Select party"
                                </option>
                                <For
                                    each=move || vm.parties.get()
                                    key=|party| party.id
                                    children=move |party| {
                                        let party_id = party.id;
                                        view! {
                                            <option
                                                value=party_id.to_string()
                                                selected=move || {
                                                    vm.form.with(|f| f.party_id == Some(party_id))
                                                }
                                            >
                                                {party.name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            <FieldError errors=vm.errors path="party_id" />
                        </div>

                        <div class="form__group">
                            <label>"Jagad No"</label>
                            <input
                                type="text"
                                prop:value=move || vm.form.with(|f| f.jagad_no.clone())
                                on:input=move |ev| {
                                    vm.form.update(|f| f.jagad_no = event_target_value(&ev));
                                }
                                placeholder="e.g. JGD-118"
                            />
                            <FieldError errors=vm.errors path="jagad_no" />
                        </div>

                        <div class="form__group">
                            <label>"Status"</label>
                            <select on:change=move |ev| {
                                if let Some(status) = Status::from_str(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.status = status);
                                }
                            }>
                                {Status::ALL
                                    .iter()
                                    .map(|status| {
                                        let value = status.as_str();
                                        let label = status.label();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || vm.form.with(|f| f.status.as_str() == value)
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label>"Received at"</label>
                            <input
                                type="datetime-local"
                                prop:value=move || vm.form.with(|f| to_input_datetime(&f.received_at))
                                on:change=move |ev| {
                                    vm.form.update(|f| f.received_at = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=vm.errors path="received_at" />
                        </div>

                        <div class="form__group">
                            <label>"Delivered at"</label>
                            <input
                                type="datetime-local"
                                prop:value=move || {
                                    vm.form
                                        .with(|f| {
                                            f.delivered_at
                                                .as_deref()
                                                .map(to_input_datetime)
                                                .unwrap_or_default()
                                        })
                                }
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.delivered_at = if value.is_empty() { None } else { Some(value) };
                                    });
                                }
                            />
                            <FieldError errors=vm.errors path="delivered_at" />
                        </div>

                        <div class="form__group">
                            <label>"Delivered by"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.delivered_by = value.parse().ok());
                            }>
                                <option value="" selected=move || vm.form.with(|f| f.delivered_by.is_none())>
                                    "Not delivered"
                                </option>
                                <For
                                    each=move || vm.staff.get()
                                    key=|member| member.id
                                    children=move |member| {
                                        let staff_id = member.id;
                                        view! {
                                            <option
                                                value=staff_id.to_string()
                                                selected=move || {
                                                    vm.form.with(|f| f.delivered_by == Some(staff_id))
                                                }
                                            >
                                                {member.name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            <FieldError errors=vm.errors path="delivered_by" />
                        </div>
                    </div>

                    <div class="form-section">
                        <div class="form-section__header">
                            <h2>"Diamond Lots"</h2>
                            <FieldError errors=vm.errors path="order_details" />
                        </div>

                        {move || {
                            let count = vm.form.with(|f| f.order_details.len());
                            (0..count)
                                .map(|index| view! { <LotRow vm=vm index=index /> })
                                .collect_view()
                        }}

                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_lot()>
                            {icon("plus")}
                            " Add Another Lot"
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
                                move |_| cancel("/orders", Default::default())
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

/// One repeatable lot row. Numeric fields stay unset until the input
/// parses.
#[component]
fn LotRow(vm: OrderDetailsViewModel, index: usize) -> impl IntoView {
    let path = move |field: &str| format!("order_details.{index}.{field}");

    view! {
        <div class="lot-card">
            <div class="lot-card__header">
                <h3>{format!("Lot #{}", index + 1)}</h3>
                <button
                    class="btn-icon btn-icon--danger"
                    title="Remove lot"
                    disabled=move || !vm.can_remove_lot()
                    on:click=move |_| vm.remove_lot(index)
                >
                    {icon("trash")}
                </button>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <label>"Number of Diamonds"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || {
                            vm.form.with(|f| {
                                f.order_details
                                    .get(index)
                                    .and_then(|lot| lot.no_of_diamonds)
                                    .map(|n| n.to_string())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(lot) = f.order_details.get_mut(index) {
                                    lot.no_of_diamonds = value.parse().ok();
                                }
                            });
                        }
                    />
                    <FieldError errors=vm.errors path=path("no_of_diamonds") />
                </div>

                <div class="form__group">
                    <label>"Price per Carat"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || {
                            vm.form.with(|f| {
                                f.order_details
                                    .get(index)
                                    .and_then(|lot| lot.price_per_caret)
                                    .map(|p| p.to_string())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(lot) = f.order_details.get_mut(index) {
                                    lot.price_per_caret = value.parse().ok();
                                }
                            });
                        }
                    />
                    <FieldError errors=vm.errors path=path("price_per_caret") />
                </div>

                <div class="form__group">
                    <label>"Total Carats"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || {
                            vm.form.with(|f| {
                                f.order_details
                                    .get(index)
                                    .and_then(|lot| lot.total_caret)
                                    .map(|c| c.to_string())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                if let Some(lot) = f.order_details.get_mut(index) {
                                    lot.total_caret = value.parse().ok();
                                }
                            });
                        }
                    />
                    <FieldError errors=vm.errors path=path("total_caret") />
                </div>

                <div class="form__group">
                    <label>"Status"</label>
                    <select on:change=move |ev| {
                        if let Some(status) = Status::from_str(&event_target_value(&ev)) {
                            vm.form.update(|f| {
                                if let Some(lot) = f.order_details.get_mut(index) {
                                    lot.status = status;
                                }
                            });
                        }
                    }>
                        {Status::ALL
                            .iter()
                            .map(|status| {
                                let value = status.as_str();
                                let label = status.label();
                                view! {
                                    <option
                                        value=value
                                        selected=move || {
                                            vm.form.with(|f| {
                                                f.order_details
                                                    .get(index)
                                                    .map(|lot| lot.status.as_str() == value)
                                                    .unwrap_or(false)
                                            })
                                        }
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

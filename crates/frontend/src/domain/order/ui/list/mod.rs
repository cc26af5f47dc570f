use contracts::domain::order::aggregate::{Lot, LotForm, Order, Status};
use contracts::shared::query::ListRequest;
use contracts::shared::validation::{Validate, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::order::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::field_error::FieldError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::save_document;
use crate::shared::icons::icon;
use crate::shared::list_query::ListQueryController;

const PAGE_SIZE: usize = 10;

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let query = ListQueryController::new(PAGE_SIZE, "received_at");
    let items: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    // Errors from row actions (delete, bill); the query error replaces
    // the table instead
    let notice: RwSignal<Option<String>> = RwSignal::new(None);

    let expanded: RwSignal<Option<i64>> = RwSignal::new(None);
    let lot_dialog: RwSignal<Option<LotForm>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<(i64, String)>> = RwSignal::new(None);
    let pending_lot_delete: RwSignal<Option<i64>> = RwSignal::new(None);
    let (deleting, set_deleting) = signal(false);
    let (billing, set_billing) = signal(false);

    let run_fetch = move |request: ListRequest| {
        spawn_local(async move {
            let result = api::fetch_orders(&request).await;
            // Superseded while in flight: a newer descriptor owns the view
            if !query.is_current(&request) {
                return;
            }
            match result {
                Ok(page) => {
                    items.set(page.data);
                    query.finish_ok(page.total_pages);
                }
                Err(e) => query.finish_err(e.to_string()),
            }
        });
    };

    Effect::new(move |_| {
        query.state.track();
        if let Some(request) = query.begin() {
            run_fetch(request);
        }
    });

    let reload = move || run_fetch(query.force());

    let confirm_delete = move |_| {
        let Some((id, _)) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    reload();
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            set_deleting.set(false);
        });
    };

    let confirm_lot_delete = move |_| {
        let Some(id) = pending_lot_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_lot(id).await {
                Ok(()) => {
                    pending_lot_delete.set(None);
                    reload();
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            set_deleting.set(false);
        });
    };

    let download_bill = move |_| {
        let request = query.state.with_untracked(|s| s.request());
        set_billing.set(true);
        notice.set(None);
        spawn_local(async move {
            match api::generate_bill(&request).await {
                Ok(bytes) => {
                    if let Err(e) = save_document(&bytes, "orders-bill.pdf", "application/pdf") {
                        notice.set(Some(e));
                    }
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            set_billing.set(false);
        });
    };

    let sort_indicator = move |field: &'static str| {
        query.state.with(|s| {
            if s.sort_field == field {
                if s.sort_ascending {
                    " ▲"
                } else {
                    " ▼"
                }
            } else {
                ""
            }
        })
    };
    let toggle_sort = move |field: &'static str| {
        move |_| query.state.update(|s| s.toggle_sort(field))
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=download_bill
                        disabled=Signal::derive(move || billing.get())
                    >
                        {icon("download")}
                        {move || if billing.get() { " Generating..." } else { " Bill" }}
                    </Button>
                    <A href="/orders/create" attr:class="btn btn-primary">
                        {icon("plus")}
                        " New Order"
                    </A>
                </div>
            </div>

            <div class="page__content">
                {move || notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || query.state.with(|s| s.page))
                                total_pages=Signal::derive(move || query.state.with(|s| s.total_pages))
                                on_page_change=Callback::new(move |page| {
                                    query.state.update(|s| s.set_page(page));
                                })
                            />
                        </div>
                        <div class="filter-panel-header__right"></div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                placeholder="Jagad no or party..."
                                on_commit=Callback::new(move |term: String| {
                                    query.state.update(|s| s.commit_search(&term));
                                })
                            />
                            <DateRangePicker
                                date_from=Signal::derive(move || query.state.with(|s| s.date_from.clone()))
                                date_to=Signal::derive(move || query.state.with(|s| s.date_to.clone()))
                                on_change=Callback::new(move |(from, to)| {
                                    query.state.update(|s| s.set_date_range(from, to));
                                })
                            />
                            <select
                                class="filter-select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    let status = if value.is_empty() { None } else { Some(value) };
                                    query.state.update(|s| s.set_status(status));
                                }
                            >
                                <option value="" selected=move || query.state.with(|s| s.status.is_none())>
                                    "All statuses"
                                </option>
                                {Status::ALL
                                    .iter()
                                    .map(|status| {
                                        let value = status.as_str();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || {
                                                    query.state.with(|s| s.status.as_deref() == Some(value))
                                                }
                                            >
                                                {status.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </Flex>
                    </div>
                </div>

                <Show
                    when=move || query.error.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="alert alert--error">
                                {move || query.error.get().unwrap_or_default()}
                            </div>
                        }
                    }
                >
                    <div class="table-wrapper" class:table-wrapper--loading=move || query.loading.get()>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=32.0></TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>
                                        <div class="table__sortable-header" on:click=toggle_sort("jagad_no")>
                                            "Jagad No" {move || sort_indicator("jagad_no")}
                                        </div>
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>"Party"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>
                                        <div class="table__sortable-header" on:click=toggle_sort("status")>
                                            "Status" {move || sort_indicator("status")}
                                        </div>
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=140.0>
                                        <div class="table__sortable-header" on:click=toggle_sort("received_at")>
                                            "Received" {move || sort_indicator("received_at")}
                                        </div>
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=140.0>
                                        <div class="table__sortable-header" on:click=toggle_sort("delivered_at")>
                                            "Delivered" {move || sort_indicator("delivered_at")}
                                        </div>
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=60.0>"Lots"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0></TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || items.get()
                                    key=|order| order.id
                                    children=move |order: Order| {
                                        let order_id = order.id;
                                        let jagad_no = order.jagad_no.clone();
                                        let jagad_for_delete = order.jagad_no.clone();
                                        let party = order.party_name.clone().unwrap_or_default();
                                        let status = order.status;
                                        let received = format_datetime(&order.received_at);
                                        let delivered = order
                                            .delivered_at
                                            .as_deref()
                                            .map(format_datetime)
                                            .unwrap_or_else(|| "-".to_string());
                                        let lots = order.order_details.clone();
                                        let lot_count = lots.len();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <button
                                                        class="btn-icon"
                                                        title="Show lots"
                                                        on:click=move |_| {
                                                            expanded.update(|e| {
                                                                *e = if *e == Some(order_id) { None } else { Some(order_id) };
                                                            });
                                                        }
                                                    >
                                                        {move || {
                                                            if expanded.get() == Some(order_id) {
                                                                icon("chevron-down")
                                                            } else {
                                                                icon("chevron-right")
                                                            }
                                                        }}
                                                    </button>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{jagad_no}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{party}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <StatusBadge status=status />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{received}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{delivered}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{lot_count}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <A
                                                        href=format!("/orders/edit/{}", order_id)
                                                        attr:class="btn-icon"
                                                        attr:title="Edit order"
                                                    >
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="btn-icon btn-icon--danger"
                                                        title="Delete order"
                                                        on:click=move |_| {
                                                            pending_delete
                                                                .set(Some((order_id, jagad_for_delete.clone())));
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCell>
                                            </TableRow>
                                            <Show when=move || expanded.get() == Some(order_id) clone:lots>
                                                <TableRow clone:lots>
                                                    <TableCell attr:colspan="8" clone:lots>
                                                        <LotsPanel
                                                            lots=lots.clone()
                                                            on_edit=Callback::new(move |lot: Lot| {
                                                                lot_dialog.set(Some(LotForm::from_record(&lot)));
                                                            })
                                                            on_add=Callback::new(move |_| {
                                                                lot_dialog.set(Some(LotForm {
                                                                    order_id: Some(order_id),
                                                                    ..LotForm::default()
                                                                }));
                                                            })
                                                            on_delete=Callback::new(move |lot_id| {
                                                                pending_lot_delete.set(Some(lot_id));
                                                            })
                                                        />
                                                    </TableCell>
                                                </TableRow>
                                            </Show>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || !query.loading.get() && items.with(|i| i.is_empty())>
                            <p class="page__empty">"No orders match the current filters"</p>
                        </Show>
                    </div>
                </Show>
            </div>

            {move || {
                lot_dialog
                    .get()
                    .map(|form| {
                        view! {
                            <LotDialog
                                form=form
                                on_close=Callback::new(move |_| lot_dialog.set(None))
                                on_saved=Callback::new(move |_| {
                                    lot_dialog.set(None);
                                    reload();
                                })
                            />
                        }
                    })
            }}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete order".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|(_, jagad_no)| {
                            format!("Delete order {}? Its lots are removed with it.", jagad_no)
                        })
                        .unwrap_or_default()
                })
                busy=Signal::derive(move || deleting.get())
                on_confirm=Callback::new(confirm_delete)
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />

            <ConfirmDialog
                open=Signal::derive(move || pending_lot_delete.get().is_some())
                title="Delete lot".to_string()
                message="Delete this lot from the order?".to_string()
                busy=Signal::derive(move || deleting.get())
                on_confirm=Callback::new(confirm_lot_delete)
                on_cancel=Callback::new(move |_| pending_lot_delete.set(None))
            />
        </div>
    }
}

#[component]
fn LotsPanel(
    lots: Vec<Lot>,
    on_edit: Callback<Lot>,
    on_add: Callback<()>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="lots-panel">
            <table class="lots-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Diamonds"</th>
                        <th>"Total carats"</th>
                        <th>"Price / carat"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {lots
                        .into_iter()
                        .enumerate()
                        .map(|(index, lot)| {
                            let lot_id = lot.id;
                            let status = lot.status;
                            let lot_for_edit = lot.clone();
                            view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td>{lot.no_of_diamonds}</td>
                                    <td>{format!("{:.2}", lot.total_caret)}</td>
                                    <td>{format!("{:.2}", lot.price_per_caret)}</td>
                                    <td>
                                        <StatusBadge status=status />
                                    </td>
                                    <td>
                                        <button
                                            class="btn-icon"
                                            title="Edit lot"
                                            on:click=move |_| on_edit.run(lot_for_edit.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="btn-icon btn-icon--danger"
                                            title="Delete lot"
                                            on:click=move |_| on_delete.run(lot_id)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_add.run(())>
                {icon("plus")}
                " Add lot"
            </Button>
        </div>
    }
}

/// Create/edit dialog for a single lot outside the full order form
#[component]
fn LotDialog(form: LotForm, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let is_edit = form.id.is_some();
    let form = RwSignal::new(form);
    let errors = RwSignal::new(ValidationErrors::default());
    let (saving, set_saving) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    let on_save = move |_| {
        let current = form.get_untracked();
        match current.validate() {
            Ok(()) => errors.set(ValidationErrors::default()),
            Err(validation) => {
                errors.set(validation);
                return;
            }
        }
        set_saving.set(true);
        set_notice.set(None);
        spawn_local(async move {
            match api::save_lot(&current).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_notice.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{if is_edit { "Edit lot" } else { "New lot" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label>"Number of diamonds"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || {
                                form.with(|f| f.no_of_diamonds.map(|n| n.to_string()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.no_of_diamonds = value.parse().ok());
                            }
                        />
                        <FieldError errors=errors path="no_of_diamonds" />
                    </div>

                    <div class="form__group">
                        <label>"Price per carat"</label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || {
                                form.with(|f| f.price_per_caret.map(|p| p.to_string()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.price_per_caret = value.parse().ok());
                            }
                        />
                        <FieldError errors=errors path="price_per_caret" />
                    </div>

                    <div class="form__group">
                        <label>"Total carats"</label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || {
                                form.with(|f| f.total_caret.map(|c| c.to_string()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.total_caret = value.parse().ok());
                            }
                        />
                        <FieldError errors=errors path="total_caret" />
                    </div>

                    <div class="form__group">
                        <label>"Status"</label>
                        <select on:change=move |ev| {
                            if let Some(status) = Status::from_str(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
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
                                            selected=move || form.with(|f| f.status.as_str() == value)
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

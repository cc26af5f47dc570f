//! Per-staff attendance month view
//!
//! Records table plus the month roll-up card, with dialogs for marking a
//! single day and for filing a multi-day leave request.

use contracts::domain::attendance::aggregate::{
    AttendanceForm, AttendanceRecord, AttendanceStatus, AttendanceSummary, LeaveRequestForm,
};
use contracts::shared::validation::{Validate, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::staff::api;
use crate::shared::components::field_error::FieldError;
use crate::shared::date_utils::{current_date, current_month, format_date};
use crate::shared::icons::icon;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let params = use_params_map();
    let staff_id: i64 = params
        .with_untracked(|p| p.get("id").and_then(|v| v.parse().ok()))
        .unwrap_or_default();

    let staff_name: RwSignal<String> = RwSignal::new(String::new());
    let month: RwSignal<String> = RwSignal::new(current_month());
    let records: RwSignal<Vec<AttendanceRecord>> = RwSignal::new(Vec::new());
    let summary: RwSignal<Option<AttendanceSummary>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let notice: RwSignal<Option<String>> = RwSignal::new(None);

    let mark_open: RwSignal<bool> = RwSignal::new(false);
    let leave_open: RwSignal<bool> = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_by_id(staff_id).await {
            Ok(staff) => staff_name.set(staff.full_name()),
            Err(e) => log::error!("failed to load staff member: {}", e),
        }
    });

    let run_fetch = move || {
        let selected = month.get_untracked();
        loading.set(true);
        notice.set(None);
        spawn_local(async move {
            match api::fetch_attendance(staff_id, &selected).await {
                Ok(list) => records.set(list),
                Err(e) => notice.set(Some(e.to_string())),
            }
            // "YYYY-MM" split for the summary endpoint
            if let Some((year, month_no)) = selected.split_once('-') {
                if let (Ok(year), Ok(month_no)) = (year.parse::<i32>(), month_no.parse::<u32>()) {
                    match api::fetch_summary(staff_id, month_no, year).await {
                        Ok(rollup) => summary.set(Some(rollup)),
                        Err(e) => log::error!("failed to load attendance summary: {}", e),
                    }
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        month.track();
        run_fetch();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/staff" attr:class="btn-icon" attr:title="Back to staff">
                        {icon("chevron-left")}
                    </A>
                    <h1 class="page__title">
                        {move || {
                            let name = staff_name.get();
                            if name.is_empty() {
                                "Attendance".to_string()
                            } else {
                                format!("Attendance: {}", name)
                            }
                        }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| leave_open.set(true)
                    >
                        {icon("calendar")}
                        " Leave Request"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| mark_open.set(true)>
                        {icon("plus")}
                        " Mark Attendance"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form__group">
                                <label>"Month"</label>
                                <input
                                    type="month"
                                    prop:value=move || month.get()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        if !value.is_empty() {
                                            month.set(value);
                                        }
                                    }
                                />
                            </div>
                        </Flex>
                    </div>
                </div>

                {move || {
                    summary
                        .get()
                        .map(|rollup| {
                            view! {
                                <div class="summary-card">
                                    <div class="summary-card__item">
                                        <span class="summary-card__value">{rollup.total_days}</span>
                                        <span class="summary-card__label">"Total days"</span>
                                    </div>
                                    <div class="summary-card__item">
                                        <span class="summary-card__value">{rollup.present_days}</span>
                                        <span class="summary-card__label">"Present"</span>
                                    </div>
                                    <div class="summary-card__item">
                                        <span class="summary-card__value">{rollup.absent_days}</span>
                                        <span class="summary-card__label">"Absent"</span>
                                    </div>
                                    <div class="summary-card__item">
                                        <span class="summary-card__value">{rollup.half_days}</span>
                                        <span class="summary-card__label">"Half days"</span>
                                    </div>
                                    <div class="summary-card__item">
                                        <span class="summary-card__value">
                                            {format!("{:.1}%", rollup.attendance_percentage)}
                                        </span>
                                        <span class="summary-card__label">"Attendance"</span>
                                    </div>
                                </div>
                            }
                        })
                }}

                <div class="table-wrapper" class:table-wrapper--loading=move || loading.get()>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Date"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Reason"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || records.get()
                                key=|record| record.id
                                children=move |record: AttendanceRecord| {
                                    let date = format_date(&record.date);
                                    let status = record.status;
                                    let reason = record
                                        .reason
                                        .clone()
                                        .filter(|r| !r.is_empty())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <AttendanceBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{reason}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && records.with(|r| r.is_empty())>
                        <p class="page__empty">"No attendance recorded for this month"</p>
                    </Show>
                </div>
            </div>

            <Show when=move || mark_open.get()>
                <MarkAttendanceDialog
                    staff_id=staff_id
                    on_close=Callback::new(move |_| mark_open.set(false))
                    on_saved=Callback::new(move |_| {
                        mark_open.set(false);
                        run_fetch();
                    })
                />
            </Show>

            <Show when=move || leave_open.get()>
                <LeaveRequestDialog
                    staff_id=staff_id
                    on_close=Callback::new(move |_| leave_open.set(false))
                    on_saved=Callback::new(move |_| {
                        leave_open.set(false);
                        run_fetch();
                    })
                />
            </Show>
        </div>
    }
}

#[component]
fn AttendanceBadge(status: AttendanceStatus) -> impl IntoView {
    let class = match status {
        AttendanceStatus::Present => "badge badge--success",
        AttendanceStatus::Absent => "badge badge--error",
        AttendanceStatus::HalfDay => "badge badge--warning",
    };
    view! { <span class=class>{status.label()}</span> }
}

#[component]
fn MarkAttendanceDialog(
    staff_id: i64,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(AttendanceForm {
        staff_id,
        attendance_date: current_date(),
        status: AttendanceStatus::Present,
        reason: None,
    });
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
            match api::mark_attendance(&current).await {
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
                    <h2 class="modal-title">"Mark attendance"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label>"Date"</label>
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.attendance_date.clone())
                            on:change=move |ev| {
                                form.update(|f| f.attendance_date = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="attendance_date" />
                    </div>

                    <div class="form__group">
                        <label>"Status"</label>
                        <select on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::from_str(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }>
                            {AttendanceStatus::ALL
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

                    <Show when=move || form.with(|f| f.status.requires_reason())>
                        <div class="form__group">
                            <label>"Reason"</label>
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.reason.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        f.reason = if value.is_empty() { None } else { Some(value) };
                                    });
                                }
                            />
                            <FieldError errors=errors path="reason" />
                        </div>
                    </Show>
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

#[component]
fn LeaveRequestDialog(
    staff_id: i64,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(LeaveRequestForm {
        staff_id,
        start_date: current_date(),
        end_date: current_date(),
        status: AttendanceStatus::Absent,
        reason: String::new(),
    });
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
            match api::request_leave(&current).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_notice.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    // Only the two non-present statuses are valid leave types
    const LEAVE_TYPES: [AttendanceStatus; 2] =
        [AttendanceStatus::Absent, AttendanceStatus::HalfDay];

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Leave request"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || notice.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label>"From"</label>
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.start_date.clone())
                            on:change=move |ev| {
                                form.update(|f| f.start_date = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="start_date" />
                    </div>

                    <div class="form__group">
                        <label>"To"</label>
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.end_date.clone())
                            on:change=move |ev| {
                                form.update(|f| f.end_date = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="end_date" />
                    </div>

                    <div class="form__group">
                        <label>"Leave type"</label>
                        <select on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::from_str(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }>
                            {LEAVE_TYPES
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
                        <FieldError errors=errors path="status" />
                    </div>

                    <div class="form__group">
                        <label>"Reason"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.reason.clone())
                            on:input=move |ev| {
                                form.update(|f| f.reason = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="reason" />
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
                        {move || if saving.get() { "Submitting..." } else { "Submit" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

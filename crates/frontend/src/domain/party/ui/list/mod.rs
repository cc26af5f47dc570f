use contracts::domain::party::aggregate::Party;
use contracts::shared::query::ListRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::party::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_query::ListQueryController;

const PAGE_SIZE: usize = 10;

#[component]
pub fn PartiesListPage() -> impl IntoView {
    let query = ListQueryController::new(PAGE_SIZE, "created_at");
    let items: RwSignal<Vec<Party>> = RwSignal::new(Vec::new());
    let notice: RwSignal<Option<String>> = RwSignal::new(None);

    let pending_delete: RwSignal<Option<(i64, String)>> = RwSignal::new(None);
    let (deleting, set_deleting) = signal(false);

    let run_fetch = move |request: ListRequest| {
        spawn_local(async move {
            let result = api::fetch_parties(&request).await;
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
                    <h1 class="page__title">"Parties"</h1>
                </div>
                <div class="page__header-right">
                    <A href="/parties/create" attr:class="btn btn-primary">
                        {icon("plus")}
                        " New Party"
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
                                placeholder="Name, email or phone..."
                                on_commit=Callback::new(move |term: String| {
                                    query.state.update(|s| s.commit_search(&term));
                                })
                            />
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
                                    <TableHeaderCell min_width=160.0>
                                        <div class="table__sortable-header" on:click=toggle_sort("name")>
                                            "Name" {move || sort_indicator("name")}
                                        </div>
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Office"</TableHeaderCell>
                                    <TableHeaderCell min_width=150.0>"GSTIN"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0>"Addresses"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0></TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || items.get()
                                    key=|party| party.id
                                    children=move |party: Party| {
                                        let party_id = party.id;
                                        let name = party.name.clone();
                                        let name_for_delete = party.name.clone();
                                        let email = party.email.clone().unwrap_or_default();
                                        let phone = party.personal_phone.clone().unwrap_or_default();
                                        let office = party.office_phone.clone().unwrap_or_default();
                                        let gstin = party
                                            .gstin_no
                                            .clone()
                                            .filter(|g| !g.is_empty())
                                            .unwrap_or_else(|| "-".to_string());
                                        let address_count = party.party_addresses.len();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{name}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{phone}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{office}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{gstin}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{address_count}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <A
                                                        href=format!("/parties/edit/{}", party_id)
                                                        attr:class="btn-icon"
                                                        attr:title="Edit party"
                                                    >
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="btn-icon btn-icon--danger"
                                                        title="Delete party"
                                                        on:click=move |_| {
                                                            pending_delete
                                                                .set(Some((party_id, name_for_delete.clone())));
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || !query.loading.get() && items.with(|i| i.is_empty())>
                            <p class="page__empty">"No parties match the current filters"</p>
                        </Show>
                    </div>
                </Show>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete party".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| format!("Delete party {}?", name))
                        .unwrap_or_default()
                })
                busy=Signal::derive(move || deleting.get())
                on_confirm=Callback::new(confirm_delete)
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </div>
    }
}

//! Customer table page: search, sort, select, edit, delete and CSV export.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `CustomerTable` signal for its mounted lifetime. Leaving
//! the route drops it, so a revisit starts again from the seed data.

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::customer_edit_dialog::CustomerEditDialog;
use crate::state::customers::{Customer, CustomerTable, EditDialog, PendingDelete, SortDirection, SortField};
use crate::state::notice::NoticeState;
use crate::util::browser;
use crate::util::csv::customer_export_filename;
use crate::util::number::group_thousands;

/// Dollar amount with thousands separators and up to three fraction digits,
/// trailing zeros dropped (`$1,234.5`, `$2,840`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_revenue(value: f64) -> String {
    let millis = (value.abs() * 1000.0).round() as u64;
    let (whole, frac) = (millis / 1000, millis % 1000);
    let grouped = group_thousands(whole);
    let sign = if value < 0.0 && millis != 0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        let frac = format!("{frac:03}");
        format!("{sign}${grouped}.{}", frac.trim_end_matches('0'))
    }
}

fn sort_arrow(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "↑",
        Some(SortDirection::Desc) => "↓",
        None => "↕",
    }
}

fn selection_summary(count: usize) -> String {
    format!("{count} row(s) selected")
}

fn shows_bulk_bar(selected: usize) -> bool {
    selected > 0
}

fn can_bulk_edit(selected: usize) -> bool {
    selected == 1
}

#[component]
pub fn TablesPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let table = RwSignal::new(CustomerTable::default());

    let selected_count = move || table.with(|t| t.selected.len());

    let on_export = move |_| {
        let (csv, count) = table.with_untracked(|t| (t.export_csv(), t.export_rows().len()));
        let filename = customer_export_filename(&browser::now_iso());
        if browser::download_text(&filename, "text/csv", &csv) {
            notices.update(|n| {
                n.success(format!("Exported {count} customer(s) to CSV"));
            });
        } else {
            leptos::logging::warn!("csv download refused for {filename}");
            notices.update(|n| {
                n.error("Export failed");
            });
        }
    };

    let on_bulk_edit = move |_| {
        if let Some(Err(e)) = table.try_update(CustomerTable::open_bulk_edit) {
            notices.update(|n| {
                n.info(e.to_string());
            });
        }
    };

    let on_bulk_delete = move |_| {
        if let Some(Err(e)) = table.try_update(CustomerTable::request_delete_selected) {
            notices.update(|n| {
                n.info(e.to_string());
            });
        }
    };

    let on_delete_confirm = Callback::new(move |()| match table.try_update(CustomerTable::confirm_delete) {
        Some(Ok(message)) => {
            leptos::logging::log!("{message}");
            notices.update(|n| {
                n.success(message);
            });
        }
        Some(Err(e)) => leptos::logging::warn!("delete confirmation failed: {e}"),
        None => {}
    });
    let on_delete_cancel = Callback::new(move |()| table.update(CustomerTable::decline_delete));
    let delete_title =
        Signal::derive(move || table.with(|t| t.pending_delete.as_ref().map(|p| p.title().to_owned()).unwrap_or_default()));
    let delete_prompt =
        Signal::derive(move || table.with(|t| t.pending_delete.as_ref().map(PendingDelete::prompt).unwrap_or_default()));

    view! {
        <div class="page tables-page">
            <header class="page__header">
                <h2>"Data Tables"</h2>
                <p class="page__subtitle">"Advanced tables with sorting, filtering, and CRUD operations"</p>
            </header>

            <section class="card">
                <div class="card__toolbar">
                    <h3>"Customer Table"</h3>
                    <div class="card__toolbar-actions">
                        <input
                            class="input input--search"
                            type="search"
                            placeholder="Search customers..."
                            prop:value=move || table.with(|t| t.query.clone())
                            on:input=move |ev| table.update(|t| t.set_query(event_target_value(&ev)))
                        />
                        <button class="btn" on:click=on_export>
                            "Export"
                        </button>
                    </div>
                </div>

                <Show when=move || shows_bulk_bar(selected_count())>
                    <div class="bulk-bar">
                        <span class="bulk-bar__count">{move || selection_summary(selected_count())}</span>
                        <div class="bulk-bar__actions">
                            <button
                                class="btn btn--small"
                                disabled=move || !can_bulk_edit(selected_count())
                                title=move || {
                                    if can_bulk_edit(selected_count()) { "Edit selected customer" } else { "Select exactly 1 row to edit" }
                                }
                                on:click=on_bulk_edit
                            >
                                "Edit"
                            </button>
                            <button class="btn btn--small btn--danger" on:click=on_bulk_delete>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </Show>

                <div class="data-table__wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th class="data-table__th data-table__th--check">
                                    <input
                                        type="checkbox"
                                        aria-label="Select all"
                                        prop:checked=move || table.with(CustomerTable::all_selected)
                                        on:change=move |_| table.update(CustomerTable::toggle_select_all)
                                    />
                                </th>
                                <SortHeader label="Name" field=SortField::Name table=table/>
                                <SortHeader label="Email" field=SortField::Email table=table/>
                                <SortHeader label="Role" field=SortField::Role table=table/>
                                <SortHeader label="Status" field=SortField::Status table=table/>
                                <SortHeader label="Orders" field=SortField::Orders table=table/>
                                <SortHeader label="Revenue" field=SortField::Revenue table=table/>
                                <th class="data-table__th">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                table
                                    .with(|t| t.visible().into_iter().cloned().collect::<Vec<_>>())
                                    .into_iter()
                                    .map(|customer| view! { <CustomerRow customer=customer table=table notices=notices/> })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || table.with(|t| t.visible().is_empty())>
                        <p class="data-table__empty">"No customers match your search."</p>
                    </Show>
                </div>
            </section>

            <Show when=move || table.with(|t| matches!(t.edit, EditDialog::Open { .. }))>
                <CustomerEditDialog table=table notices=notices/>
            </Show>
            <Show when=move || table.with(|t| t.pending_delete.is_some())>
                <ConfirmDialog
                    title=delete_title
                    message=delete_prompt
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

/// Column header that sorts on click and shows the active direction.
#[component]
fn SortHeader(label: &'static str, field: SortField, table: RwSignal<CustomerTable>) -> impl IntoView {
    view! {
        <th class="data-table__th">
            <button class="data-table__sort" on:click=move |_| table.update(|t| t.sort_by(field))>
                {label}
                " "
                <span aria-hidden="true">{move || sort_arrow(table.with(|t| t.sort_indicator(field)))}</span>
            </button>
        </th>
    }
}

#[component]
fn CustomerRow(customer: Customer, table: RwSignal<CustomerTable>, notices: RwSignal<NoticeState>) -> impl IntoView {
    let id = StoredValue::new(customer.id.clone());
    let is_selected = move || id.with_value(|id| table.with(|t| t.is_selected(id)));

    let on_edit = move |_| {
        if let Some(Err(e)) = id.with_value(|id| table.try_update(|t| t.open_edit(id))) {
            notices.update(|n| {
                n.error(e.to_string());
            });
        }
    };
    let on_delete = move |_| {
        if let Some(Err(e)) = id.with_value(|id| table.try_update(|t| t.request_delete(id))) {
            notices.update(|n| {
                n.error(e.to_string());
            });
        }
    };

    view! {
        <tr class=move || {
            if is_selected() { "data-table__row data-table__row--selected" } else { "data-table__row" }
        }>
            <td class="data-table__td data-table__td--check">
                <input
                    type="checkbox"
                    aria-label="Select row"
                    prop:checked=is_selected
                    on:change=move |_| id.with_value(|id| table.update(|t| t.toggle_select(id)))
                />
            </td>
            <td class="data-table__td data-table__td--name">{customer.name}</td>
            <td class="data-table__td">{customer.email}</td>
            <td class="data-table__td">
                <span class="badge badge--outline">{customer.role.as_str()}</span>
            </td>
            <td class="data-table__td">
                <span class=format!("badge badge--{}", customer.status)>{customer.status.as_str()}</span>
            </td>
            <td class="data-table__td data-table__td--num">{customer.orders}</td>
            <td class="data-table__td data-table__td--num">{format_revenue(customer.revenue)}</td>
            <td class="data-table__td data-table__td--actions">
                <button class="btn btn--icon" title="Edit" on:click=on_edit>
                    "✎"
                </button>
                <button class="btn btn--icon btn--danger" title="Delete" on:click=on_delete>
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

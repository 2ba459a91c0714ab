//! Modal dialog for editing one customer row.
//!
//! Inputs write straight into the table's open draft; nothing touches the
//! collection until `Save` passes validation.

use leptos::prelude::*;

use crate::state::customers::{CustomerPatch, CustomerStatus, CustomerTable, EditDialog, Role};
use crate::state::notice::NoticeState;

#[component]
pub fn CustomerEditDialog(table: RwSignal<CustomerTable>, notices: RwSignal<NoticeState>) -> impl IntoView {
    let read = move |field: fn(&CustomerPatch) -> String| {
        table.with(|t| match &t.edit {
            EditDialog::Open { draft, .. } => field(draft),
            EditDialog::Closed => String::new(),
        })
    };
    let write = move |field: fn(&mut CustomerPatch, String), value: String| {
        table.update(|t| {
            if let Some(draft) = t.draft_mut() {
                field(draft, value);
            }
        });
    };

    let on_cancel = move |_| table.update(CustomerTable::cancel_edit);
    let on_save = move |_| match table.try_update(CustomerTable::save_edit) {
        Some(Ok(message)) => {
            leptos::logging::log!("{message}");
            notices.update(|n| {
                n.success(message);
            });
        }
        Some(Err(e)) => notices.update(|n| {
            n.error(e.to_string());
        }),
        None => {}
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog dialog--customer" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Customer"</h2>
                <p class="dialog__subtitle">"Update customer information. Click save when you're done."</p>
                <label class="dialog__label">
                    "Name *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || read(|d| d.name.clone())
                        on:input=move |ev| write(|d, v| d.name = v, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email *"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || read(|d| d.email.clone())
                        on:input=move |ev| write(|d, v| d.email = v, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        prop:value=move || read(|d| d.role.unwrap_or_default().as_str().to_owned())
                        on:change=move |ev| write(|d, v| d.role = Role::parse(&v).or(d.role), event_target_value(&ev))
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || read(|d| d.status.unwrap_or_default().as_str().to_owned())
                        on:change=move |ev| {
                            write(|d, v| d.status = CustomerStatus::parse(&v).or(d.status), event_target_value(&ev));
                        }
                    >
                        {CustomerStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Orders"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || read(|d| d.orders.unwrap_or_default().to_string())
                            on:input=move |ev| {
                                write(|d, v| d.orders = v.trim().parse().ok().or(d.orders), event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Revenue"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || read(|d| d.revenue.unwrap_or_default().to_string())
                            on:input=move |ev| {
                                write(
                                    |d, v| {
                                        d.revenue = v.trim().parse::<f64>().ok().filter(|r| *r >= 0.0).or(d.revenue);
                                    },
                                    event_target_value(&ev),
                                );
                            }
                        />
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_save>
                        "Save Changes"
                    </button>
                </div>
            </div>
        </div>
    }
}

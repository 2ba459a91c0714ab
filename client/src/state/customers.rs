//! Customer table controller: search, sort, selection, edit and delete.
//!
//! DESIGN
//! ======
//! All table behavior lives on a plain struct so the page only binds it to a
//! single `RwSignal`. The collection is never re-ordered in place; sorting and
//! filtering produce a derived view via `visible()`.
//!
//! Selection always refers to the full collection, not the filtered view.
//! Deleting a record also drops its id from the selection.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::util::csv::{CUSTOMER_CSV_HEADER, write_csv};

/// Customer tier shown in the role column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Role {
    #[default]
    Customer,
    Premium,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Customer, Role::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Premium => "Premium",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. Variant order matches the lowercase label order so the
/// derived `Ord` sorts the same way the labels do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [CustomerStatus::Active, CustomerStatus::Inactive, CustomerStatus::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Pending => "pending",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the customer table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: CustomerStatus,
    pub orders: u32,
    pub revenue: f64,
}

impl Customer {
    fn new(id: &str, name: &str, email: &str, role: Role, status: CustomerStatus, orders: u32, revenue: f64) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            status,
            orders,
            revenue,
        }
    }

    /// Case-insensitive substring match on name or email.
    ///
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }

    fn csv_fields(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.status.to_string(),
            self.orders.to_string(),
            self.revenue.to_string(),
        ]
    }
}

/// The fixed dataset the table starts from on every mount.
pub fn seed_customers() -> Vec<Customer> {
    use CustomerStatus::{Active, Inactive, Pending};
    use Role::{Customer as Regular, Premium};

    vec![
        Customer::new("1", "Sarah Johnson", "sarah.j@email.com", Regular, Active, 24, 2840.0),
        Customer::new("2", "Michael Chen", "m.chen@email.com", Premium, Active, 45, 5920.0),
        Customer::new("3", "Emma Wilson", "emma.w@email.com", Regular, Active, 12, 1560.0),
        Customer::new("4", "James Brown", "j.brown@email.com", Regular, Pending, 3, 420.0),
        Customer::new("5", "Lisa Anderson", "lisa.a@email.com", Premium, Active, 67, 8940.0),
        Customer::new("6", "David Martinez", "d.martinez@email.com", Regular, Inactive, 8, 980.0),
        Customer::new("7", "Sophia Taylor", "s.taylor@email.com", Premium, Active, 34, 4560.0),
        Customer::new("8", "Ryan Garcia", "r.garcia@email.com", Regular, Active, 19, 2340.0),
    ]
}

/// Column a table view can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    Role,
    Status,
    Orders,
    Revenue,
}

impl SortField {
    fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Email => a.email.cmp(&b.email),
            SortField::Role => a.role.cmp(&b.role),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Orders => a.orders.cmp(&b.orders),
            SortField::Revenue => a.revenue.total_cmp(&b.revenue),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Field values submitted from the edit dialog.
///
/// Name and email are mandatory; the remaining fields overwrite the record
/// only when present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub status: Option<CustomerStatus>,
    pub orders: Option<u32>,
    pub revenue: Option<f64>,
}

impl CustomerPatch {
    fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

impl From<&Customer> for CustomerPatch {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            role: Some(c.role),
            status: Some(c.status),
            orders: Some(c.orders),
            revenue: Some(c.revenue),
        }
    }
}

/// Edit dialog lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open { record_id: String, draft: CustomerPatch },
}

/// A destructive action waiting for the user to confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    One { id: String, name: String },
    Many { ids: Vec<String> },
}

impl PendingDelete {
    pub fn title(&self) -> &'static str {
        match self {
            PendingDelete::One { .. } => "Delete Customer",
            PendingDelete::Many { ids } if ids.len() == 1 => "Delete Customer",
            PendingDelete::Many { .. } => "Delete Customers",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            PendingDelete::One { name, .. } => {
                format!("Are you sure you want to delete {name}? This action cannot be undone.")
            }
            PendingDelete::Many { ids } => format!(
                "Are you sure you want to delete {} customer(s)? This action cannot be undone.",
                ids.len()
            ),
        }
    }
}

/// Rejected table operations. `Display` is the user-facing notice text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Select exactly 1 row to edit")]
    BulkEditNeedsSingleSelection { selected: usize },
    #[error("No customers selected")]
    NoSelection,
    #[error("customer not found: {0}")]
    NotFound(String),
    #[error("No edit in progress")]
    NoOpenEdit,
    #[error("No deletion awaiting confirmation")]
    NothingToConfirm,
}

/// Customer table state owned by one mounted table.
#[derive(Clone, Debug)]
pub struct CustomerTable {
    pub rows: Vec<Customer>,
    pub selected: BTreeSet<String>,
    pub query: String,
    pub sort: Option<SortConfig>,
    pub edit: EditDialog,
    pub pending_delete: Option<PendingDelete>,
}

impl Default for CustomerTable {
    fn default() -> Self {
        Self::new(seed_customers())
    }
}

impl CustomerTable {
    pub fn new(rows: Vec<Customer>) -> Self {
        Self {
            rows,
            selected: BTreeSet::new(),
            query: String::new(),
            sort: None,
            edit: EditDialog::Closed,
            pending_delete: None,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.rows.iter().find(|c| c.id == id)
    }

    // =============================================================
    // Search + sort
    // =============================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the current query, in collection order.
    pub fn filtered(&self) -> Vec<&Customer> {
        let needle = self.query.to_lowercase();
        self.rows.iter().filter(|c| c.matches(&needle)).collect()
    }

    /// Filtered records, ordered by the active sort if any.
    pub fn visible(&self) -> Vec<&Customer> {
        let mut rows = self.filtered();
        if let Some(SortConfig { field, direction }) = self.sort {
            rows.sort_by(|a, b| {
                let ord = field.compare(a, b);
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        rows
    }

    /// Header click: same field toggles direction, a new field starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        let direction = match self.sort {
            Some(current) if current.field == field => current.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortConfig { field, direction });
    }

    pub fn sort_indicator(&self, field: SortField) -> Option<SortDirection> {
        self.sort.filter(|s| s.field == field).map(|s| s.direction)
    }

    // =============================================================
    // Selection
    // =============================================================

    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected.remove(id) && self.get(id).is_some() {
            self.selected.insert(id.to_owned());
        }
    }

    /// Clears the selection when every record is selected, otherwise selects
    /// every record in the collection regardless of the active query.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.rows.iter().map(|c| c.id.clone()).collect();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selected.len() == self.rows.len()
    }

    // =============================================================
    // Edit
    // =============================================================

    pub fn open_edit(&mut self, id: &str) -> Result<(), TableError> {
        let record = self.get(id).ok_or_else(|| TableError::NotFound(id.to_owned()))?;
        self.edit = EditDialog::Open {
            record_id: record.id.clone(),
            draft: CustomerPatch::from(record),
        };
        Ok(())
    }

    /// Opens the dialog for the single selected record. Refused unless
    /// exactly one record is selected.
    pub fn open_bulk_edit(&mut self) -> Result<(), TableError> {
        let selected = self.selected.len();
        if selected != 1 {
            return Err(TableError::BulkEditNeedsSingleSelection { selected });
        }
        let id = self
            .rows
            .iter()
            .find(|c| self.selected.contains(&c.id))
            .map(|c| c.id.clone())
            .ok_or(TableError::NoSelection)?;
        self.open_edit(&id)
    }

    pub fn draft_mut(&mut self) -> Option<&mut CustomerPatch> {
        match &mut self.edit {
            EditDialog::Open { draft, .. } => Some(draft),
            EditDialog::Closed => None,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditDialog::Closed;
    }

    /// Validates the open draft, merges it and closes the dialog.
    ///
    /// On validation failure the dialog stays open with the draft intact.
    pub fn save_edit(&mut self) -> Result<String, TableError> {
        let EditDialog::Open { record_id, draft } = &self.edit else {
            return Err(TableError::NoOpenEdit);
        };
        let (record_id, draft) = (record_id.clone(), draft.clone());
        let name = self.edit(&record_id, draft)?.name.clone();
        self.edit = EditDialog::Closed;
        Ok(format!("Successfully updated {name}"))
    }

    /// Merges `patch` into the record with `id`.
    pub fn edit(&mut self, id: &str, patch: CustomerPatch) -> Result<&Customer, TableError> {
        if !patch.has_required_fields() {
            return Err(TableError::MissingRequiredFields);
        }
        let record = self
            .rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| TableError::NotFound(id.to_owned()))?;
        record.name = patch.name;
        record.email = patch.email;
        if let Some(role) = patch.role {
            record.role = role;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        if let Some(orders) = patch.orders {
            record.orders = orders;
        }
        if let Some(revenue) = patch.revenue {
            record.revenue = revenue;
        }
        Ok(record)
    }

    // =============================================================
    // Delete
    // =============================================================

    pub fn request_delete(&mut self, id: &str) -> Result<(), TableError> {
        let record = self.get(id).ok_or_else(|| TableError::NotFound(id.to_owned()))?;
        self.pending_delete = Some(PendingDelete::One {
            id: record.id.clone(),
            name: record.name.clone(),
        });
        Ok(())
    }

    pub fn request_delete_selected(&mut self) -> Result<(), TableError> {
        if self.selected.is_empty() {
            return Err(TableError::NoSelection);
        }
        self.pending_delete = Some(PendingDelete::Many {
            ids: self.selected.iter().cloned().collect(),
        });
        Ok(())
    }

    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Applies the pending deletion and returns the success notice.
    pub fn confirm_delete(&mut self) -> Result<String, TableError> {
        match self.pending_delete.take() {
            Some(PendingDelete::One { id, .. }) => {
                let removed = self.delete_one(&id)?;
                Ok(format!("Successfully deleted {}", removed.name))
            }
            Some(PendingDelete::Many { ids }) => {
                let count = self.delete_many(&ids);
                Ok(format!("Successfully deleted {count} customer(s)"))
            }
            None => Err(TableError::NothingToConfirm),
        }
    }

    pub fn delete_one(&mut self, id: &str) -> Result<Customer, TableError> {
        let index = self
            .rows
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| TableError::NotFound(id.to_owned()))?;
        self.selected.remove(id);
        self.close_edit_for(id);
        Ok(self.rows.remove(index))
    }

    /// Removes every record whose id is in `ids`; returns the number removed.
    pub fn delete_many(&mut self, ids: &[String]) -> usize {
        let before = self.rows.len();
        self.rows.retain(|c| !ids.contains(&c.id));
        for id in ids {
            self.selected.remove(id);
            self.close_edit_for(id);
        }
        before - self.rows.len()
    }

    fn close_edit_for(&mut self, id: &str) {
        if matches!(&self.edit, EditDialog::Open { record_id, .. } if record_id == id) {
            self.edit = EditDialog::Closed;
        }
    }

    // =============================================================
    // Export
    // =============================================================

    /// Selected records when there is a selection, otherwise every record.
    /// Always in collection order.
    pub fn export_rows(&self) -> Vec<&Customer> {
        if self.selected.is_empty() {
            self.rows.iter().collect()
        } else {
            self.rows.iter().filter(|c| self.selected.contains(&c.id)).collect()
        }
    }

    pub fn export_csv(&self) -> String {
        write_csv(&CUSTOMER_CSV_HEADER, self.export_rows().into_iter().map(Customer::csv_fields))
    }
}

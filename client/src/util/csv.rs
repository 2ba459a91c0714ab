//! CSV serialization for table exports.
//!
//! Values containing a comma, quote or line break are quoted and inner quotes
//! doubled. Everything else is written verbatim, so plain data round-trips
//! to the same bytes an unescaped join would produce.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use std::borrow::Cow;

pub const CUSTOMER_CSV_HEADER: [&str; 6] = ["Name", "Email", "Role", "Status", "Orders", "Revenue"];

/// Quote a single field when it would otherwise break the row.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Join a header and rows into CSV text. Rows are separated by `\n` with no
/// trailing newline.
pub fn write_csv<I, R, S>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut lines = vec![join_row(header)];
    lines.extend(rows.into_iter().map(|row| join_row(row.as_ref())));
    lines.join("\n")
}

fn join_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Download name for a customer export taken on `iso_timestamp`'s date.
pub fn customer_export_filename(iso_timestamp: &str) -> String {
    let date = iso_timestamp.split('T').next().unwrap_or(iso_timestamp);
    format!("customers-{date}.csv")
}

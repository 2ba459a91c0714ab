use super::*;

#[test]
fn escape_field_leaves_plain_values_untouched() {
    assert_eq!(escape_field("Sarah Johnson"), "Sarah Johnson");
    assert!(matches!(escape_field("2840"), Cow::Borrowed(_)));
}

#[test]
fn escape_field_quotes_commas_quotes_and_newlines() {
    assert_eq!(escape_field("Acme, Inc."), "\"Acme, Inc.\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
}

#[test]
fn write_csv_emits_header_then_rows_without_trailing_newline() {
    let rows = vec![vec!["a", "b"], vec!["c", "d"]];
    assert_eq!(write_csv(&["X", "Y"], rows), "X,Y\na,b\nc,d");
}

#[test]
fn write_csv_with_no_rows_is_header_only() {
    let rows: Vec<Vec<String>> = Vec::new();
    assert_eq!(write_csv(&CUSTOMER_CSV_HEADER, rows), "Name,Email,Role,Status,Orders,Revenue");
}

#[test]
fn write_csv_escapes_embedded_commas() {
    let rows = vec![["Lee, Ann".to_owned(), "x@y.io".to_owned()]];
    assert_eq!(write_csv(&["Name", "Email"], rows), "Name,Email\n\"Lee, Ann\",x@y.io");
}

#[test]
fn customer_export_filename_uses_date_part() {
    assert_eq!(customer_export_filename("2026-10-19T08:15:00.000Z"), "customers-2026-10-19.csv");
    assert_eq!(customer_export_filename("2026-10-19"), "customers-2026-10-19.csv");
}

use super::*;

#[test]
fn format_revenue_groups_thousands() {
    assert_eq!(format_revenue(420.0), "$420");
    assert_eq!(format_revenue(2840.0), "$2,840");
    assert_eq!(format_revenue(1_234_567.0), "$1,234,567");
}

#[test]
fn format_revenue_drops_trailing_fraction_zeros() {
    assert_eq!(format_revenue(1234.5), "$1,234.5");
    assert_eq!(format_revenue(0.05), "$0.05");
    assert_eq!(format_revenue(99.99), "$99.99");
}

#[test]
fn format_revenue_rounds_to_three_fraction_digits() {
    assert_eq!(format_revenue(1.23456), "$1.235");
    assert_eq!(format_revenue(7.0004), "$7");
}

#[test]
fn sort_arrow_reflects_direction() {
    assert_eq!(sort_arrow(None), "↕");
    assert_eq!(sort_arrow(Some(SortDirection::Asc)), "↑");
    assert_eq!(sort_arrow(Some(SortDirection::Desc)), "↓");
}

#[test]
fn selection_summary_counts_rows() {
    assert_eq!(selection_summary(3), "3 row(s) selected");
}

#[test]
fn bulk_bar_shows_for_any_selection() {
    assert!(!shows_bulk_bar(0));
    assert!(shows_bulk_bar(1));
    assert!(shows_bulk_bar(5));
}

#[test]
fn bulk_edit_needs_exactly_one_row() {
    assert!(!can_bulk_edit(0));
    assert!(can_bulk_edit(1));
    assert!(!can_bulk_edit(2));
}

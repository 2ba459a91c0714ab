use super::*;

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(1_842), "1,842");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn signed_percent_marks_gains_and_losses() {
    assert_eq!(signed_percent(12.5), "+12.5%");
    assert_eq!(signed_percent(-2.1), "-2.1%");
    assert_eq!(signed_percent(0.0), "+0%");
}

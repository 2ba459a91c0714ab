use super::*;

fn filled() -> SignupForm {
    SignupForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        ..SignupForm::default()
    }
}

#[test]
fn default_form_subscribes_to_newsletter() {
    let form = SignupForm::default();
    assert!(form.newsletter);
    assert!(!form.notifications);
}

#[test]
fn empty_form_reports_both_required_fields() {
    let mut form = SignupForm::default();
    assert_eq!(form.submit(), Err(SUBMIT_FAILED));
    assert_eq!(form.error(FormField::Name), Some("Name is required"));
    assert_eq!(form.error(FormField::Email), Some("Email is required"));
}

#[test]
fn malformed_email_is_invalid() {
    let mut form = filled();
    form.email = "ada@example".to_owned();
    assert_eq!(form.submit(), Err(SUBMIT_FAILED));
    assert_eq!(form.error(FormField::Email), Some("Email is invalid"));
    assert_eq!(form.error(FormField::Name), None);
}

#[test]
fn valid_form_clears_previous_errors() {
    let mut form = SignupForm::default();
    let _ = form.submit();
    form.name = "Ada".to_owned();
    form.email = "ada@example.com".to_owned();
    assert_eq!(form.submit(), Ok(SUBMIT_OK));
    assert!(form.errors.is_empty());
}

#[test]
fn looks_like_email_matches_loose_shape() {
    assert!(looks_like_email("a@b.c"));
    assert!(looks_like_email("first.last@sub.example.org"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.c"));
    assert!(!looks_like_email("a b@c d"));
}

use super::*;

fn sample() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello there".to_owned(),
        ..ContactForm::default()
    }
}

#[test]
fn body_uses_na_for_empty_optional_fields() {
    let body = sample().body();
    assert!(body.starts_with("Name: Ada Lovelace\nEmail: ada@example.com\n"));
    assert!(body.contains("Company: N/A\nPhone: N/A\nTimeline: N/A\nBudget: N/A"));
    assert!(body.ends_with("\n\nMessage:\nHello there"));
}

#[test]
fn body_includes_filled_optional_fields() {
    let mut form = sample();
    form.company = "Analytical Engines".to_owned();
    form.budget = "10k-25k".to_owned();
    let body = form.body();
    assert!(body.contains("Company: Analytical Engines"));
    assert!(body.contains("Budget: 10k-25k"));
}

#[test]
fn mailto_url_percent_encodes_subject_and_body() {
    let url = sample().mailto_url();
    assert!(url.starts_with("mailto:hello@byteandbrisk.com?subject=New%20Contact%20Form%20Submission%20from%20Ada%20Lovelace&body="));
    assert!(url.contains("Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com"));
    assert!(!url.contains(' '));
}

#[test]
fn start_over_clears_fields_and_submitted_flag() {
    let mut form = sample();
    form.submitted = true;
    form.start_over();
    assert_eq!(form, ContactForm::default());
}

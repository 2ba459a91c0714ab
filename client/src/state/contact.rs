//! Contact form state and the `mailto:` link it submits through.
//!
//! The form never talks to a server: submitting hands a pre-filled message to
//! the user's mail client and flips the page to its thank-you view.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const CONTACT_ADDRESS: &str = "hello@byteandbrisk.com";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub timeline: String,
    pub budget: String,
    pub message: String,
    pub submitted: bool,
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

impl ContactForm {
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\nPhone: {}\nTimeline: {}\nBudget: {}\n\nMessage:\n{}",
            self.name,
            self.email,
            or_na(&self.company),
            or_na(&self.phone),
            or_na(&self.timeline),
            or_na(&self.budget),
            self.message,
        )
    }

    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{CONTACT_ADDRESS}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }

    /// "Send another message": back to a blank form.
    pub fn start_over(&mut self) {
        *self = Self::default();
    }
}

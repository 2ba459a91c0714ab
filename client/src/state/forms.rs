//! Sign-up form state and validation for the forms showcase page.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub bio: String,
    pub notifications: bool,
    pub newsletter: bool,
    pub errors: BTreeMap<FormField, &'static str>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            role: String::new(),
            bio: String::new(),
            notifications: false,
            newsletter: true,
            errors: BTreeMap::new(),
        }
    }
}

pub const SUBMIT_FAILED: &str = "Please fix the errors in the form";
pub const SUBMIT_OK: &str = "Form submitted successfully!";

pub fn looks_like_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

impl SignupForm {
    pub fn validate(&self) -> BTreeMap<FormField, &'static str> {
        let mut errors = BTreeMap::new();
        if self.name.is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }
        if self.email.is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !looks_like_email(&self.email) {
            errors.insert(FormField::Email, "Email is invalid");
        }
        errors
    }

    /// Validate and record field errors. Returns the notice to show.
    pub fn submit(&mut self) -> Result<&'static str, &'static str> {
        self.errors = self.validate();
        if self.errors.is_empty() { Ok(SUBMIT_OK) } else { Err(SUBMIT_FAILED) }
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}

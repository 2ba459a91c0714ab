//! Account settings with draft/saved copies and a localStorage blob.
//!
//! SYSTEM CONTEXT
//! ==============
//! The settings page edits `draft` freely; only `save` promotes it to `saved`
//! and produces the blob written under `SETTINGS_STORAGE_KEY`. The blob shape
//! is `{ settings, profileImage, lastSaved }`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "adminProSettings";

/// Largest accepted profile image, in bytes.
pub const MAX_PROFILE_IMAGE_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub company: String,
    pub location: String,
    pub timezone: String,
    pub language: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub marketing_emails: bool,
    pub security_alerts: bool,
    pub two_factor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            bio: "Product designer and developer".to_owned(),
            company: "Acme Inc.".to_owned(),
            location: "San Francisco, CA".to_owned(),
            timezone: "America/Los_Angeles".to_owned(),
            language: "en".to_owned(),
            email_notifications: true,
            push_notifications: false,
            marketing_emails: true,
            security_alerts: true,
            two_factor: false,
        }
    }
}

/// Persisted settings blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub settings: Settings,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub last_saved: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Image size should be less than 2MB")]
    ImageTooLarge { bytes: f64 },
    #[error("Please upload a JPG, PNG or GIF image")]
    UnsupportedImageType { mime: String },
}

/// Check an uploaded file before reading it into a data URL.
pub fn validate_profile_image(mime: &str, bytes: f64) -> Result<(), SettingsError> {
    if bytes > MAX_PROFILE_IMAGE_BYTES {
        return Err(SettingsError::ImageTooLarge { bytes });
    }
    if !ACCEPTED_IMAGE_TYPES.contains(&mime) {
        return Err(SettingsError::UnsupportedImageType { mime: mime.to_owned() });
    }
    Ok(())
}

/// Settings page state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsState {
    pub draft: Settings,
    pub saved: Settings,
    pub draft_image: Option<String>,
    pub saved_image: Option<String>,
    pub last_saved: Option<u64>,
}

impl SettingsState {
    /// Restore both copies from a stored blob.
    pub fn from_stored(stored: StoredSettings) -> Self {
        Self {
            draft: stored.settings.clone(),
            saved: stored.settings,
            draft_image: stored.profile_image.clone(),
            saved_image: stored.profile_image,
            last_saved: stored.last_saved,
        }
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.draft != self.saved || self.draft_image != self.saved_image
    }

    /// Promote the draft and return the blob to persist.
    pub fn save(&mut self, now_ms: u64) -> StoredSettings {
        self.saved = self.draft.clone();
        self.saved_image = self.draft_image.clone();
        self.last_saved = Some(now_ms);
        StoredSettings {
            settings: self.saved.clone(),
            profile_image: self.saved_image.clone(),
            last_saved: self.last_saved,
        }
    }

    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
        self.draft_image = self.saved_image.clone();
    }

    /// Back to factory defaults. The caller also removes the stored blob.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_image(&mut self, data_url: String) {
        self.draft_image = Some(data_url);
    }

    /// Revert the draft image to the saved one. Returns `true` when a saved
    /// image remains.
    pub fn remove_image(&mut self) -> bool {
        self.draft_image = self.saved_image.clone();
        self.draft_image.is_some()
    }

    /// Initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.draft
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Human-readable age of a timestamp, both in ms since the Unix epoch.
pub fn relative_time(then_ms: u64, now_ms: u64) -> String {
    let seconds = now_ms.saturating_sub(then_ms) / 1000;
    match seconds {
        0..60 => "just now".to_owned(),
        60..3_600 => format!("{} minutes ago", seconds / 60),
        3_600..86_400 => format!("{} hours ago", seconds / 3_600),
        86_400..604_800 => format!("{} days ago", seconds / 86_400),
        _ => calendar_date(then_ms),
    }
}

fn calendar_date(ms: u64) -> String {
    let secs = i64::try_from(ms / 1000).unwrap_or(i64::MAX);
    time::OffsetDateTime::from_unix_timestamp(secs)
        .map(|dt| dt.date().to_string())
        .unwrap_or_default()
}

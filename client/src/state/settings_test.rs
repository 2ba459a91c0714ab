use super::*;

// =============================================================
// Draft / saved lifecycle
// =============================================================

#[test]
fn default_state_has_no_unsaved_changes() {
    let state = SettingsState::default();
    assert!(!state.has_unsaved_changes());
    assert_eq!(state.draft.name, "John Doe");
    assert_eq!(state.last_saved, None);
}

#[test]
fn editing_draft_marks_unsaved() {
    let mut state = SettingsState::default();
    state.draft.company = "Globex".to_owned();
    assert!(state.has_unsaved_changes());
}

#[test]
fn image_change_marks_unsaved() {
    let mut state = SettingsState::default();
    state.set_image("data:image/png;base64,AAAA".to_owned());
    assert!(state.has_unsaved_changes());
}

#[test]
fn save_promotes_draft_and_returns_blob() {
    let mut state = SettingsState::default();
    state.draft.two_factor = true;
    state.set_image("data:image/png;base64,AAAA".to_owned());
    let stored = state.save(1_700_000_000_000);
    assert!(!state.has_unsaved_changes());
    assert!(stored.settings.two_factor);
    assert_eq!(stored.profile_image.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(stored.last_saved, Some(1_700_000_000_000));
}

#[test]
fn cancel_reverts_to_saved() {
    let mut state = SettingsState::default();
    state.draft.bio = "changed".to_owned();
    state.set_image("data:x".to_owned());
    state.cancel();
    assert_eq!(state.draft, Settings::default());
    assert_eq!(state.draft_image, None);
}

#[test]
fn reset_restores_defaults_and_clears_timestamp() {
    let mut state = SettingsState::default();
    state.draft.name = "Jane".to_owned();
    state.save(5);
    state.reset();
    assert_eq!(state, SettingsState::default());
}

#[test]
fn remove_image_reverts_to_saved_image() {
    let mut state = SettingsState::default();
    state.set_image("data:first".to_owned());
    state.save(1);
    state.set_image("data:second".to_owned());
    assert!(state.remove_image());
    assert_eq!(state.draft_image.as_deref(), Some("data:first"));

    let mut fresh = SettingsState::default();
    fresh.set_image("data:only".to_owned());
    assert!(!fresh.remove_image());
    assert_eq!(fresh.draft_image, None);
}

#[test]
fn initials_take_first_two_words() {
    let state = SettingsState::default();
    assert_eq!(state.initials(), "JD");
}

// =============================================================
// Stored blob
// =============================================================

#[test]
fn stored_blob_uses_camel_case_keys() {
    let mut state = SettingsState::default();
    let stored = state.save(42);
    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["lastSaved"], 42);
    assert_eq!(json["profileImage"], serde_json::Value::Null);
    assert_eq!(json["settings"]["emailNotifications"], true);
    assert_eq!(json["settings"]["twoFactor"], false);
}

#[test]
fn stored_blob_without_optional_fields_parses() {
    let raw = serde_json::json!({ "settings": Settings::default() });
    let stored: StoredSettings = serde_json::from_value(raw).unwrap();
    assert_eq!(stored.profile_image, None);
    assert_eq!(stored.last_saved, None);
}

#[test]
fn from_stored_restores_both_copies() {
    let mut settings = Settings::default();
    settings.language = "de".to_owned();
    let state = SettingsState::from_stored(StoredSettings {
        settings: settings.clone(),
        profile_image: Some("data:x".to_owned()),
        last_saved: Some(9),
    });
    assert_eq!(state.draft, settings);
    assert_eq!(state.saved, settings);
    assert!(!state.has_unsaved_changes());
    assert_eq!(state.last_saved, Some(9));
}

// =============================================================
// Image validation
// =============================================================

#[test]
fn validate_profile_image_accepts_small_png() {
    assert_eq!(validate_profile_image("image/png", 1024.0), Ok(()));
    assert_eq!(validate_profile_image("image/gif", MAX_PROFILE_IMAGE_BYTES), Ok(()));
}

#[test]
fn validate_profile_image_rejects_large_files() {
    let err = validate_profile_image("image/jpeg", MAX_PROFILE_IMAGE_BYTES + 1.0).unwrap_err();
    assert_eq!(err.to_string(), "Image size should be less than 2MB");
}

#[test]
fn validate_profile_image_rejects_other_types() {
    let err = validate_profile_image("image/webp", 10.0).unwrap_err();
    assert_eq!(err, SettingsError::UnsupportedImageType { mime: "image/webp".to_owned() });
}

// =============================================================
// Relative time
// =============================================================

#[test]
fn relative_time_buckets() {
    let now = 1_000_000_000_000;
    assert_eq!(relative_time(now - 5_000, now), "just now");
    assert_eq!(relative_time(now - 120_000, now), "2 minutes ago");
    assert_eq!(relative_time(now - 3 * 3_600_000, now), "3 hours ago");
    assert_eq!(relative_time(now - 2 * 86_400_000, now), "2 days ago");
}

#[test]
fn relative_time_falls_back_to_calendar_date() {
    // 2001-09-09T01:46:40Z
    let then = 1_000_000_000_000;
    assert_eq!(relative_time(then, then + 30 * 86_400_000), "2001-09-09");
}

#[test]
fn relative_time_future_timestamp_is_just_now() {
    assert_eq!(relative_time(2_000, 1_000), "just now");
}

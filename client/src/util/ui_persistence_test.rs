#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::settings::{SETTINGS_STORAGE_KEY, StoredSettings};

#[test]
fn load_json_is_none_off_browser() {
    assert_eq!(load_json::<StoredSettings>(SETTINGS_STORAGE_KEY), None);
}

#[test]
fn save_json_reports_unavailable_off_browser() {
    let err = save_json("k", &serde_json::json!({ "a": 1 })).unwrap_err();
    assert!(matches!(err, PersistenceError::Unavailable));
    assert_eq!(err.to_string(), "local storage is unavailable");
}

#[test]
fn remove_reports_unavailable_off_browser() {
    assert!(matches!(remove("k"), Err(PersistenceError::Unavailable)));
}

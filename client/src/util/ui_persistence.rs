//! Browser localStorage helpers for persisted page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so pages can
//! persist JSON blobs without repeating web-sys glue. Off-browser builds
//! (SSR, unit tests) see storage as unavailable.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage rejected write for key {key}")]
    Write { key: String },
}

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, PersistenceError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PersistenceError::Unavailable)
}

/// Load a JSON value from `localStorage` for `key`.
///
/// Missing keys and unparseable values both read as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage().ok()?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("ignoring malformed {key} in localStorage: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(value)?;
    #[cfg(feature = "hydrate")]
    {
        storage()?
            .set_item(key, &raw)
            .map_err(|_| PersistenceError::Write { key: key.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Err(PersistenceError::Unavailable)
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) -> Result<(), PersistenceError> {
    #[cfg(feature = "hydrate")]
    {
        storage()?
            .remove_item(key)
            .map_err(|_| PersistenceError::Write { key: key.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(PersistenceError::Unavailable)
    }
}

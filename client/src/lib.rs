//! # client
//!
//! Leptos + WASM frontend for the Admin Pro dashboard.
//!
//! This crate contains pages, components and page-scoped state. The customer
//! table controller in `state::customers` holds all record-table rules; pages
//! only wire its operations to DOM events and surface the returned notices.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic and log hooks, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

//! Page-owned client state.
//!
//! DESIGN
//! ======
//! State is split by page (`customers`, `settings`, `forms`, ...) so each page
//! binds one focused model to a signal. Nothing here touches the browser,
//! which keeps every rule testable with plain `cargo test`.

pub mod contact;
pub mod customers;
pub mod dashboard;
pub mod forms;
pub mod iot;
pub mod notice;
pub mod pricing;
pub mod settings;

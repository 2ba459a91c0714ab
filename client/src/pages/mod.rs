//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state signal and delegates shared widgets
//! to `components`. Notices go through the app-wide `NoticeState` context.

pub mod contact;
pub mod dashboard;
pub mod forms;
pub mod iot;
pub mod not_found;
pub mod pricing;
pub mod settings;
pub mod tables;

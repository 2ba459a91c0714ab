//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and dialogs. They receive the signals
//! they mutate as props, except the notice banner which reads context.

pub mod confirm_dialog;
pub mod customer_edit_dialog;
pub mod flippable_card;
pub mod notice_banner;
pub mod sidebar;

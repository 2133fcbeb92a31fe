//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and the entity edit dialogs while reading
//! shared state from Leptos context providers.

pub mod project_modal;
pub mod scanner_modal;
pub mod sidebar;
pub mod stat_card;

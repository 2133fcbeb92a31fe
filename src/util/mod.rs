//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and closed lookup
//! tables from page and component logic to improve reuse and testability.

pub mod clock;
pub mod filters;
pub mod format;
pub mod vendors;

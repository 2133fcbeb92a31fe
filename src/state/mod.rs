//! Shared reactive state provided to components via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens own their fetched snapshots; the only state shared across the app
//! is the session identity and the active view. There is no cross-screen
//! cache or invalidation mechanism.

pub mod auth;
pub mod nav;
pub mod stats;

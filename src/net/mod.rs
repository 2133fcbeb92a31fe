//! Networking modules for the backend HTTP interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `query` is the generic table-scoped query client, `api` layers typed
//! entity helpers on top of it, and `types` defines the shared wire schema.

pub mod api;
pub mod query;
pub mod types;

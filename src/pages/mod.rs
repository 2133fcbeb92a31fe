//! Page modules for shell-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own fetched snapshot and screen-scoped orchestration,
//! delegating shared rendering to `components`. Exactly one page is active
//! at a time, chosen by the navigation shell.

pub mod dashboard;
pub mod login;
pub mod projects;
pub mod scanners;
pub mod scans;
pub mod vulnerabilities;

//! # securehub
//!
//! Leptos + WASM frontend for the SecureHub security scanning dashboard.
//! Presents projects, scanner integrations, scan history, and vulnerability
//! findings backed by a PostgREST-style data API, with a generic query
//! client in `net` and per-screen components in `pages`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

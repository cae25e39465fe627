//! # dashboard-client
//!
//! Leptos + WASM frontend for the racing analytics dashboard.
//!
//! This crate owns the browser session lifecycle: the persisted session
//! store, the tab-wide session context, the route guard in front of the
//! dashboard and the auth actions that talk to the analytics backend.
//! Statistics widgets are out of scope and live with the backend team.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

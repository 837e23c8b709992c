//! # admin-console
//!
//! Leptos + WASM client for the admin console, rendered entirely in the
//! browser.
//!
//! The core is the route guard: every guarded mount verifies the browser
//! session once against `GET /users/verify` and then renders its children,
//! a loading placeholder, or a redirect. The login page is the only screen
//! unauthenticated users can reach.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// mounts the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}

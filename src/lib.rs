//! # course-catalog
//!
//! Leptos + WASM client for the course catalog REST API.
//!
//! Signed-out visitors can browse the course list and read course details.
//! Signed-in users can create courses and update or delete the ones they own.
//! Every view maps the API's status codes onto a render, an inline error list,
//! an alert, or a navigation to one of the error routes.
//!
//! Browser-only code (fetch, `localStorage`, dialogs, mounting) is gated behind
//! the `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and logger, then mounts `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}

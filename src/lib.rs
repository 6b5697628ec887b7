//! # zia-site
//!
//! Leptos + WASM single-page site for the Zia & Associates law firm.
//!
//! This crate contains the page components, static content, build-time
//! configuration, and the browser glue (viewport intersection, timers, HTTP
//! delivery) that backs the platform-agnostic `behavior` crate.
//!
//! Build for the browser with the `csr` feature; native builds compile the
//! same components with browser paths compiled out so unit tests run anywhere.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}

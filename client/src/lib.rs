//! # client
//!
//! Leptos + WASM frontend for the Plex Debrid dashboard.
//!
//! This crate contains the dashboard shell, the media page, their components,
//! context-provided UI state, and the HTTP client for the external items API.
//! The `server` crate renders it with `ssr`; the browser bundle is built with
//! `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

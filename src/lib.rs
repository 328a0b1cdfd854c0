//! # officeboard
//!
//! Leptos + WASM dashboard shell for the office-rental service.
//!
//! The crate authenticates a user against the remote auth service, resolves
//! their role per protected view, gates rendering on that role, and shows
//! short-lived status alerts for user actions. The state machines live in
//! `state` and are independent of the view layer; `components` and `pages`
//! consume them through the hooks in `util::hooks`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}

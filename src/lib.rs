//! # authsvc-web
//!
//! Leptos + WASM front-end for the auth service: a login form, a logout
//! control, and the OAuth consent prompt, routed client-side by path and
//! query string.
//!
//! All authentication, session issuance, and OAuth grant handling lives
//! server-side. Every view here is a stateless rendering of server-driven
//! data into HTML forms that post back to the server; the only network call
//! the client itself makes is the one-shot session fetch at startup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}

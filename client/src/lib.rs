//! # portal-client
//!
//! Leptos + WASM frontend for the phone/password profile portal.
//!
//! This crate contains the two route pages (login and home), the session
//! store that owns the bearer token, and the REST helpers that talk to the
//! remote auth/profile API. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature lets the host render the HTML shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

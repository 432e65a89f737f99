//! glasspane web server and UI.
//!
//! This crate provides the Leptos-based web interface for glasspane,
//! a viewer for the tokens and profile attached to the current
//! authenticated session.

#![allow(non_snake_case)]

pub mod app;
pub mod pages;
pub mod session;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod server_helpers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

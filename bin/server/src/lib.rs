//! SubTrack web server and UI.
//!
//! This crate provides the Leptos-based site: the layout shell, the
//! marketing pages, the account forms and the server functions behind them.

#![allow(non_snake_case)]
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod error;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod server_helpers;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

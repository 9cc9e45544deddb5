//! # client
//!
//! Leptos + WASM frontend for the Room.me login demo.
//!
//! This crate contains the pages, the shared auth form component, and the
//! glue that binds the framework-agnostic `session` crate to Leptos
//! signals, browser `localStorage`, timers and router navigation.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

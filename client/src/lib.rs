//! # client
//!
//! Leptos + WASM frontend for the floor-plan editor.
//!
//! This crate contains the editor chrome (toolbar, fixture rail, tips panel,
//! status bar) and its shared UI state. It drives the `canvas` crate through
//! the `CanvasHost` bridge component, which owns the engine instance.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the editor.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    log::info!("floor-plan editor starting");
    leptos::mount::mount_to_body(app::App);
}

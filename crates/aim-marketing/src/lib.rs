//! AIManufacture Pro Marketing Site
//!
//! Leptos components for the landing page. The server binary renders them
//! with `leptos_axum`; the `hydrate` build attaches them in the browser.

pub mod app;
pub mod backend;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod pages;
pub mod sections;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}

//! # casebook-client
//!
//! Leptos UI for Casebook: an editable case-study document beside a
//! chat-assistant panel. Compiled for SSR inside `casebook-server` and to
//! WASM for hydration in the browser.
//!
//! The chat panel's behavior lives in `state::chat` as a plain state
//! machine; components only wire it to the DOM, the thinking timer and the
//! assist endpoint.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

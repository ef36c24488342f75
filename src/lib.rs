//! # eternal-client
//!
//! Leptos + WASM frontend for the Eternal chat host. Replaces the
//! hand-rolled browser scripts with a Rust-native UI layer: reactive
//! model-selection highlighting, a streamed chat timeline with scroll
//! tracking, the file upload pipeline, and the inference websocket channel.
//!
//! This crate contains pages, components, application state, network types,
//! and the websocket/SSE clients. The host itself (upload handling, model
//! inventory, chat persistence, inference execution) is an external service
//! reached over HTTP.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

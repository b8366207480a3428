//! # coursepilot
//!
//! Leptos + WASM frontend for a course-assistant chat application. Students
//! browse a course library and chat with an assistant indexed on each
//! course's materials; teachers upload materials and monitor ingestion.
//!
//! This crate contains pages, components, application state, the REST API
//! layer with its queue polling protocol, and a `localStorage`-backed record
//! store for offline shell state, chat archives, and course caching.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// Client-side entry point: installs panic/log hooks and hydrates the DOM
/// rendered by the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

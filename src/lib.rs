//! # cinematch
//!
//! Leptos + WASM frontend for CineMatch, a movie recommendation site.
//! Users search for a movie they like and get a list of similar titles
//! from the recommendation API. They can keep favorites, switch between
//! grid and list layouts, and share or export their list.
//!
//! All persistent state lives in `localStorage`. `state::sync` keeps every
//! rendered surface consistent with it, including writes from other tabs.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: panic hook, console logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

//! # client
//!
//! Leptos front end for the university athletics site: the public pages,
//! the recruitment application, and the admin back office.
//!
//! Pages fetch from the athletics REST API after hydration through
//! `net::api`; every response is normalized by the `wire` crate before it
//! reaches view state.

pub mod app;
pub mod components;
pub mod content;
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

//! # dashboard
//!
//! Leptos + WASM shell for the paper-trading desk. Lays out the chat,
//! market-regime, portfolio and signal panels and owns the light/dark
//! preference, whose state machine lives in the `theme` crate.
//!
//! The `hydrate` feature builds the browser client; `ssr` builds the server
//! side rendered by the `server` crate.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("trading desk hydrating");
    leptos::mount::hydrate_body(app::App);
}

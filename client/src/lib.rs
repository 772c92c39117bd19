//! # vault-client
//!
//! Leptos + WASM front end for Cryptex Vault, a mocked blockchain asset
//! registry. Pages walk the user through connecting a wallet, registering,
//! verifying and transferring assets; every ledger interaction is simulated
//! locally.
//!
//! `state` holds the pure workflow state machines, `net` the wallet connector
//! and simulated ledger, `components` and `pages` the UI. The decorative home
//! page scene lives in the `vault-scene` crate and is mounted through
//! `components::scene_host`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic and log hooks, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

//! Inkfinity - landing site
//!
//! Server-rendered Leptos site with a hydrated client: preloader, interactive
//! hero model, localized landing sections and an early-access waitlist.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

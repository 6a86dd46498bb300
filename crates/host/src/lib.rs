//! Leptos host for the confirm service: mount [`ConfirmComponentHost`] once
//! near the app root and call `confirm_service::{alert, confirm, choose}`
//! from anywhere.

pub mod config;
pub mod host;
pub mod renderers;
pub mod shared;

#[cfg(feature = "demo")]
pub mod app;

pub use config::{ConfigError, HostConfig};
pub use host::{
    use_confirm_service, AlertRenderProps, ChoiceRenderProps, ConfirmComponentHost,
    ConfirmRenderProps,
};

#[cfg(feature = "demo")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "demo")]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[cfg(feature = "demo")]
#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

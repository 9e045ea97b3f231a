//! # findseek-client
//!
//! Leptos + WASM frontend for the Find & Seek campus lost-and-found
//! service. Talks to the REST backend relative to the page origin and
//! renders the auth form, the filterable listing dashboard, and the
//! post-item modal.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Installs the panic and log hooks, then mounts
/// [`app::App`].
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}

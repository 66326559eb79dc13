//! # panelkit
//!
//! Leptos + WASM glue for a two-pane desktop-style layout: drag-to-resize
//! between sibling flex panes, a light/dark theme switch, keyboard shortcut
//! forwarding for page zoom, and a handful of value predicates.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`resize`] | Drag-resize state machine and its browser binding |
//! | [`util`] | Theme, keyboard, zoom, and predicate helpers |
//! | [`state`] | Reactive UI chrome state shared via context |
//! | [`components`] | Layout, resizer handle, and status bar components |
//! | [`app`] | Root component |
//! | [`consts`] | Class names, attribute names, and numeric limits |
//! | [`error`] | Crate error type |
//!
//! Browser side effects are compiled only with the `csr` feature; native
//! builds keep the pure logic so it can be tested with `cargo test`.

pub mod app;
pub mod components;
pub mod consts;
pub mod error;
pub mod resize;
pub mod state;
pub mod util;

pub use error::UiError;

/// WASM entry point: installs panic/log hooks and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}

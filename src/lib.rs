//! # folio
//!
//! Client-side behavior for a static personal portfolio page, compiled to
//! WASM. The page markup and styles are authored separately; this crate
//! attaches theme switching, mobile navigation, the project detail overlay,
//! project filtering, scroll reveals, the contact form, and a handful of
//! smaller affordances to it.
//!
//! `config`, `state`, and `util` are plain Rust and build and test on any
//! target. `dom` binds them to the browser and only exists with the
//! `hydrate` feature.

pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).unwrap_or_default();

    match dom::boot() {
        Ok(_) => log::debug!("page bindings attached"),
        Err(e) => log::error!("page bindings unavailable: {e}"),
    }
}

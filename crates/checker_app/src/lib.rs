//! Resume checker browser adapter: wires `checker_core` to the page DOM.
pub mod components;
pub mod markup;
pub mod toast_registry;

#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point run by the generated JS glue once the module is loaded.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    platform::run_app();
}

//! Percussion Sketchpad WASM Module
//!
//! Staff geometry, measure grid bookkeeping and the score model behind a
//! browser drum-notation sketchpad. Drawing happens in JavaScript from the
//! frames computed here.

pub mod models;
pub mod geometry;
pub mod controller;
pub mod layout;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use geometry::{GeometryMapper, StaffConfig};
pub use controller::{dispatch, Command, Outcome};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("logger already initialized: {}", e);
    }

    log::info!("Percussion sketchpad WASM module initialized");
}

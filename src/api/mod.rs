//! Sketchpad WASM API
//!
//! This module provides the JavaScript-facing API for the percussion
//! sketchpad.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros, serialization and error helpers
//! - `types`: Result structures returned to JavaScript
//! - `core`: WASM-owned editor storage and the exported functions

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;

//! Shared types for the WASM API
//!
//! Result structures returned to JavaScript.

use serde::Serialize;

use crate::controller::Outcome;
use crate::layout::Frame;

/// Result of a dispatched command: what happened, and the frame to draw
#[derive(Serialize, Clone, Debug)]
pub struct DispatchResult {
    pub outcome: Outcome,
    pub frame: Frame,
}

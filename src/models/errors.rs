//! Edit rejections
//!
//! None of these are faults: every variant is a reachable boundary
//! condition. The controller turns them into a no-op and logs them.

use thiserror::Error;

use super::voice::VoiceId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("measure {index} out of range (measure count: {count})")]
    MeasureOutOfRange { index: usize, count: usize },

    #[error("slot already occupied: column {column}, voice {voice}")]
    SlotOccupied { column: usize, voice: VoiceId },

    #[error("invalid duration: {0} (must be at least 1 subdivision)")]
    InvalidDuration(usize),

    #[error("unknown voice: {0}")]
    UnknownVoice(String),

    #[error("clipboard is empty")]
    ClipboardEmpty,

    #[error("pointer outside the grid")]
    OutsideGrid,

    #[error("already at {0} measure")]
    AtBoundary(&'static str),
}

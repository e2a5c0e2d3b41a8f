//! Editor state management
//!
//! This module contains the EditorState struct which represents the complete
//! state of the sketchpad: the score, the hover preview, the zoom factor and
//! the selected note value.
//!
//! This is the WASM-owned source of truth for all editor state. It is plain
//! data; the controller takes it by value and hands back the next state.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::errors::EditError;
use super::score::Score;
use super::voice::VoiceId;
use crate::geometry::{GeometryMapper, GridAddress, StaffConfig};

/// Discrete durations offered by the duration selector, in subdivisions
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum NoteValue {
    Sixteenth = 1,
    Eighth = 2,
    DottedEighth = 3,
    Quarter = 4,
    Half = 8,
}

impl NoteValue {
    pub fn subdivisions(self) -> usize {
        self as usize
    }
}

impl Default for NoteValue {
    fn default() -> Self {
        NoteValue::Sixteenth
    }
}

impl TryFrom<u8> for NoteValue {
    type Error = EditError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NoteValue::Sixteenth),
            2 => Ok(NoteValue::Eighth),
            3 => Ok(NoteValue::DottedEighth),
            4 => Ok(NoteValue::Quarter),
            8 => Ok(NoteValue::Half),
            other => Err(EditError::InvalidDuration(other as usize)),
        }
    }
}

/// Candidate placement under the pointer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverState {
    pub measure_index: usize,
    pub global_column: usize,
    pub column: usize,
    pub voice: VoiceId,
    pub duration: usize,
}

impl HoverState {
    pub fn from_address(address: GridAddress, duration: usize) -> Self {
        Self {
            measure_index: address.measure_index,
            global_column: address.global_column,
            column: address.column,
            voice: address.voice,
            duration,
        }
    }
}

/// Complete editor state (WASM-owned source of truth)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EditorState {
    pub config: StaffConfig,

    pub score: Score,

    /// Placement preview, derived from the last pointer position
    pub hover: Option<HoverState>,

    /// Render scale only; grid semantics never depend on it
    pub zoom: f32,

    /// Value used for the next placement
    pub note_value: NoteValue,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(StaffConfig::default())
    }
}

impl EditorState {
    /// Create a new editor state with one empty measure
    pub fn new(config: StaffConfig) -> Self {
        let score = Score::new(config.subdivisions_per_measure);
        let zoom = config.clamp_zoom(1.0);
        Self {
            config,
            score,
            hover: None,
            zoom,
            note_value: NoteValue::default(),
        }
    }

    pub fn mapper(&self) -> GeometryMapper<'_> {
        GeometryMapper::new(&self.config)
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn set_hover(&mut self, hover: Option<HoverState>) {
        self.hover = hover;
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Set zoom, clamped to the configured range. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if zoom.is_nan() {
            return false;
        }
        self.zoom = self.config.clamp_zoom(zoom);
        true
    }

    /// Change the selected value; a live preview picks it up immediately
    pub fn select_note_value(&mut self, value: NoteValue) {
        self.note_value = value;
        if let Some(hover) = self.hover.as_mut() {
            hover.duration = value.subdivisions();
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.score.current_index() > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.score.current_index() + 1 < self.score.measure_count()
    }

    pub fn can_paste(&self) -> bool {
        self.score.clipboard().is_some()
    }

    pub fn can_clear(&self) -> bool {
        self.score
            .measure(self.score.current_index())
            .map(|m| !m.is_empty() || m.subdivisions != self.score.default_subdivisions())
            .unwrap_or(false)
    }

    /// Compact JSON dump for debug logging
    pub fn debug_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable state: {}>", e))
    }
}

//! Display List for staff rendering
//!
//! This module defines the output structure handed to JavaScript.
//! The Frame carries every pre-calculated position the presentation layer
//! needs to draw the staff, the notes and the placement preview without
//! doing any layout of its own. All coordinates are unzoomed staff units;
//! the renderer multiplies by `zoom`. Only the canvas size is pre-scaled.

use serde::{Deserialize, Serialize};

use crate::models::{HeadShape, StemDirection, VoiceId};

/// Everything needed to draw one frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub zoom: f32,

    /// Canvas size in CSS pixels, already scaled by `zoom`
    pub width: f32,
    pub height: f32,

    pub rows: Vec<RenderRow>,

    /// Placed notes, sorted by (global column, voice order)
    pub notes: Vec<RenderNote>,

    pub hover: Option<RenderHover>,

    pub toolbar: ToolbarState,
}

/// One staff row
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderRow {
    pub row: usize,

    /// Y offset of this row from the canvas top
    pub y_offset: f32,

    /// Y of each staff line, already offset by the row
    pub staff_lines: Vec<f32>,

    pub x_start: f32,
    pub x_end: f32,

    pub grid_lines: Vec<RenderGridLine>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GridLineKind {
    Subdivision,
    /// Start of a beat inside a measure
    Beat,
    /// First column of a measure
    Barline,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderGridLine {
    pub x: f32,
    pub global_column: usize,
    pub measure_index: usize,
    pub kind: GridLineKind,
    /// Set on lines belonging to the current measure
    pub current: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderNote {
    pub measure_index: usize,
    pub global_column: usize,
    pub column: usize,
    pub voice: VoiceId,
    pub duration: usize,
    pub x: f32,
    pub y: f32,
    /// Horizontal extent covered by the duration
    pub width: f32,
    pub head: HeadShape,
    pub stem: StemDirection,
}

/// Placement preview under the pointer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderHover {
    pub note: RenderNote,
    /// False when the slot is already taken and a click would be rejected
    pub placeable: bool,
}

/// Enabled state of the measure buttons
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarState {
    pub current_measure: usize,
    pub measure_count: usize,
    pub selected_duration: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_paste: bool,
    pub can_clear: bool,
}

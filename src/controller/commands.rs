//! Input commands
//!
//! One variant per input event the front end forwards. Commands are plain
//! serializable data so they can cross the WASM boundary as JS objects.

use serde::{Deserialize, Serialize};

use crate::models::NoteValue;

/// Pointer position as reported by the browser
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerInput {
    pub client_x: f32,
    pub client_y: f32,
    /// Left edge of the target element's bounding box
    pub bounds_left: f32,
    /// Top edge of the target element's bounding box
    pub bounds_top: f32,
}

impl PointerInput {
    /// Staff-local coordinates with the zoom factor divided out
    pub fn to_staff(&self, zoom: f32) -> (f32, f32) {
        (
            (self.client_x - self.bounds_left) / zoom,
            (self.client_y - self.bounds_top) / zoom,
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    PointerMove { pointer: PointerInput },
    PointerLeave,
    Click,
    SelectDuration { value: NoteValue },
    SetZoom { zoom: f32 },
    ClearMeasure,
    PrevMeasure,
    NextMeasure,
    JumpToMeasure { index: usize },
    AddMeasure,
    CopyMeasure,
    PasteMeasure,
}

impl Command {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::PointerMove { .. } => "pointerMove",
            Command::PointerLeave => "pointerLeave",
            Command::Click => "click",
            Command::SelectDuration { .. } => "selectDuration",
            Command::SetZoom { .. } => "setZoom",
            Command::ClearMeasure => "clearMeasure",
            Command::PrevMeasure => "prevMeasure",
            Command::NextMeasure => "nextMeasure",
            Command::JumpToMeasure { .. } => "jumpToMeasure",
            Command::AddMeasure => "addMeasure",
            Command::CopyMeasure => "copyMeasure",
            Command::PasteMeasure => "pasteMeasure",
        }
    }

    /// Commands that fire on every mouse move; logged at trace level
    pub fn is_pointer_motion(&self) -> bool {
        matches!(self, Command::PointerMove { .. } | Command::PointerLeave)
    }
}

//! WASM API for the sketchpad
//!
//! The editor state lives here, owned by WASM. JavaScript forwards input
//! events; each call runs one command through the controller and returns
//! the outcome plus a fresh frame for the renderer.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, validation_error};
use super::types::DispatchResult;
use crate::controller::{dispatch, Command, PointerInput};
use crate::geometry::StaffConfig;
use crate::layout::build_frame;
use crate::models::{EditorState, NoteValue, VOICES};
use crate::{wasm_info, wasm_warn};

// WASM-owned editor storage (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<EditorState>> = Mutex::new(None);
}

/// Run a command against the stored editor state
fn run_command(command: Command) -> Result<JsValue, JsValue> {
    let mut guard = EDITOR
        .lock()
        .map_err(|e| validation_error(format!("Failed to lock editor: {}", e)))?;
    let state = guard.take().ok_or_else(|| {
        wasm_warn!("{} called before initEditor", command.name());
        JsValue::from_str("Editor not initialized")
    })?;

    let (state, outcome) = dispatch(state, &command);
    let result = DispatchResult {
        outcome,
        frame: build_frame(&state),
    };
    *guard = Some(state);

    serialize(&result, "DispatchResult serialization error")
}

/// Read-only access to the stored editor state
fn with_editor<T>(f: impl FnOnce(&EditorState) -> T) -> Result<T, JsValue> {
    let guard = EDITOR
        .lock()
        .map_err(|e| validation_error(format!("Failed to lock editor: {}", e)))?;
    guard
        .as_ref()
        .map(f)
        .ok_or_else(|| validation_error("Editor not initialized"))
}

/// Create a fresh editor with one empty measure
///
/// # Parameters
/// - `config_js`: optional partial StaffConfig; missing fields use defaults
///
/// # Returns
/// The initial Frame
#[wasm_bindgen(js_name = initEditor)]
pub fn init_editor(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: StaffConfig = deserialize_or_default(config_js, "StaffConfig deserialization error")?;
    config
        .validate()
        .map_err(|e| validation_error(format!("Invalid staff config: {}", e)))?;

    let state = EditorState::new(config);
    let frame = build_frame(&state);

    let mut guard = EDITOR
        .lock()
        .map_err(|e| validation_error(format!("Failed to lock editor: {}", e)))?;
    *guard = Some(state);

    wasm_info!("initEditor: {} measure(s)", frame.toolbar.measure_count);
    serialize(&frame, "Frame serialization error")
}

/// Dispatch a command object, e.g. `{ type: "addMeasure" }`
#[wasm_bindgen(js_name = dispatchCommand)]
pub fn dispatch_command(command_js: JsValue) -> Result<JsValue, JsValue> {
    let command: Command = deserialize(command_js, "Command deserialization error")?;
    run_command(command)
}

#[wasm_bindgen(js_name = pointerMove)]
pub fn pointer_move(
    client_x: f32,
    client_y: f32,
    bounds_left: f32,
    bounds_top: f32,
) -> Result<JsValue, JsValue> {
    run_command(Command::PointerMove {
        pointer: PointerInput {
            client_x,
            client_y,
            bounds_left,
            bounds_top,
        },
    })
}

#[wasm_bindgen(js_name = pointerLeave)]
pub fn pointer_leave() -> Result<JsValue, JsValue> {
    run_command(Command::PointerLeave)
}

#[wasm_bindgen(js_name = click)]
pub fn click() -> Result<JsValue, JsValue> {
    run_command(Command::Click)
}

/// Select the note value for the next placement (1, 2, 3, 4 or 8 subdivisions)
#[wasm_bindgen(js_name = selectDuration)]
pub fn select_duration(subdivisions: u8) -> Result<JsValue, JsValue> {
    let value = NoteValue::try_from(subdivisions).map_err(|e| validation_error(e.to_string()))?;
    run_command(Command::SelectDuration { value })
}

#[wasm_bindgen(js_name = setZoom)]
pub fn set_zoom(zoom: f32) -> Result<JsValue, JsValue> {
    run_command(Command::SetZoom { zoom })
}

#[wasm_bindgen(js_name = clearMeasure)]
pub fn clear_measure() -> Result<JsValue, JsValue> {
    run_command(Command::ClearMeasure)
}

#[wasm_bindgen(js_name = prevMeasure)]
pub fn prev_measure() -> Result<JsValue, JsValue> {
    run_command(Command::PrevMeasure)
}

#[wasm_bindgen(js_name = nextMeasure)]
pub fn next_measure() -> Result<JsValue, JsValue> {
    run_command(Command::NextMeasure)
}

#[wasm_bindgen(js_name = jumpToMeasure)]
pub fn jump_to_measure(index: usize) -> Result<JsValue, JsValue> {
    run_command(Command::JumpToMeasure { index })
}

#[wasm_bindgen(js_name = addMeasure)]
pub fn add_measure() -> Result<JsValue, JsValue> {
    run_command(Command::AddMeasure)
}

#[wasm_bindgen(js_name = copyMeasure)]
pub fn copy_measure() -> Result<JsValue, JsValue> {
    run_command(Command::CopyMeasure)
}

#[wasm_bindgen(js_name = pasteMeasure)]
pub fn paste_measure() -> Result<JsValue, JsValue> {
    run_command(Command::PasteMeasure)
}

/// Current frame without dispatching anything
#[wasm_bindgen(js_name = getFrame)]
pub fn get_frame() -> Result<JsValue, JsValue> {
    let frame = with_editor(build_frame)?;
    serialize(&frame, "Frame serialization error")
}

/// Snapshot of the full editor state
#[wasm_bindgen(js_name = getEditorState)]
pub fn get_editor_state() -> Result<JsValue, JsValue> {
    let state = with_editor(EditorState::clone)?;
    serialize(&state, "EditorState serialization error")
}

/// The fixed voice table, for the legend
#[wasm_bindgen(js_name = getVoices)]
pub fn get_voices() -> Result<js_sys::Array, JsValue> {
    let result = js_sys::Array::new();
    for voice in VOICES.iter() {
        result.push(&serialize(voice, "Voice serialization error")?);
    }
    Ok(result)
}

/// Default staff configuration, for front ends that build their own overrides
#[wasm_bindgen(js_name = getDefaultStaffConfig)]
pub fn get_default_staff_config() -> Result<JsValue, JsValue> {
    serialize(&StaffConfig::default(), "StaffConfig serialization error")
}

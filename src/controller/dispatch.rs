//! Command dispatch
//!
//! `dispatch` takes the current state by value and returns the next state
//! together with an `Outcome`. Rejections never escape as errors: the
//! state comes back unchanged (apart from hover bookkeeping) and the
//! reason is logged at debug level. Pointer motion logs at trace only,
//! whatever its outcome.

use serde::Serialize;

use super::commands::{Command, PointerInput};
use crate::models::{EditError, EditorState, HoverState};

/// What a dispatched command did
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", content = "reason", rename_all = "camelCase")]
pub enum Outcome {
    /// The state changed
    Applied,
    /// Accepted, but there was nothing to change
    Unchanged,
    /// The requested effect did not happen
    Rejected(#[serde(serialize_with = "serialize_reason")] EditError),
}

fn serialize_reason<S: serde::Serializer>(err: &EditError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&err.to_string())
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    fn from_result(result: Result<(), EditError>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(e) => Outcome::Rejected(e),
        }
    }
}

/// Apply one command to the editor state
pub fn dispatch(mut state: EditorState, command: &Command) -> (EditorState, Outcome) {
    let outcome = match *command {
        Command::PointerMove { pointer } => pointer_move(&mut state, &pointer),
        Command::PointerLeave => {
            state.clear_hover();
            Outcome::Applied
        }
        Command::Click => click(&mut state),
        Command::SelectDuration { value } => {
            state.select_note_value(value);
            Outcome::Applied
        }
        Command::SetZoom { zoom } => {
            if state.set_zoom(zoom) {
                Outcome::Applied
            } else {
                Outcome::Unchanged
            }
        }
        Command::ClearMeasure => clear_measure(&mut state),
        Command::PrevMeasure => {
            state.clear_hover();
            if state.can_go_prev() {
                let index = state.score.current_index() - 1;
                state.score.select_measure(index);
                Outcome::Applied
            } else {
                Outcome::Rejected(EditError::AtBoundary("first"))
            }
        }
        Command::NextMeasure => {
            state.clear_hover();
            if state.can_go_next() {
                let index = state.score.current_index() + 1;
                state.score.select_measure(index);
                Outcome::Applied
            } else {
                Outcome::Rejected(EditError::AtBoundary("last"))
            }
        }
        Command::JumpToMeasure { index } => {
            let had_hover = state.hover.is_some();
            state.clear_hover();
            let before = state.score.current_index();
            if state.score.select_measure(index) == before && !had_hover {
                Outcome::Unchanged
            } else {
                Outcome::Applied
            }
        }
        Command::AddMeasure => {
            state.clear_hover();
            state.score.add_measure();
            Outcome::Applied
        }
        Command::CopyMeasure => {
            let current = state.score.current_index();
            Outcome::from_result(state.score.copy_to_clipboard(current))
        }
        Command::PasteMeasure => {
            let current = state.score.current_index();
            let outcome = Outcome::from_result(state.score.paste_from_clipboard(current));
            if outcome.is_applied() {
                state.clear_hover();
            }
            outcome
        }
    };

    // Pointer motion fires on every mouse move, misses included
    match &outcome {
        _ if command.is_pointer_motion() => {
            log::trace!("{} -> {:?}", command.name(), outcome)
        }
        Outcome::Rejected(reason) => {
            log::debug!("{} rejected: {}", command.name(), reason)
        }
        _ => {
            log::debug!("{} -> {:?}", command.name(), outcome);
            log::trace!("state: {}", state.debug_json());
        }
    }

    (state, outcome)
}

fn pointer_move(state: &mut EditorState, pointer: &PointerInput) -> Outcome {
    let (x, y) = pointer.to_staff(state.zoom);
    let address = state.mapper().hit_test(&state.score, x, y);

    match address {
        Some(address) => {
            let duration = state.note_value.subdivisions();
            state.set_hover(Some(HoverState::from_address(address, duration)));
            Outcome::Applied
        }
        None => {
            state.clear_hover();
            Outcome::Rejected(EditError::OutsideGrid)
        }
    }
}

/// Commit the hover preview. The preview is consumed either way so it is
/// never drawn at a spot the pointer has not revisited.
fn click(state: &mut EditorState) -> Outcome {
    let Some(hover) = state.hover.take() else {
        return Outcome::Unchanged;
    };

    Outcome::from_result(state.score.insert_note(
        hover.measure_index,
        hover.column,
        hover.voice,
        hover.duration,
    ))
}

fn clear_measure(state: &mut EditorState) -> Outcome {
    let current = state.score.current_index();
    match state.score.clear_measure(current) {
        Ok(true) => {
            state.clear_hover();
            Outcome::Applied
        }
        Ok(false) => Outcome::Unchanged,
        Err(e) => Outcome::Rejected(e),
    }
}

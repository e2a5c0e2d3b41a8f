//! Models module for the percussion sketchpad
//!
//! Voices, measures, notes and the editor state that owns them.

pub mod voice;
pub mod score;
pub mod errors;
pub mod editor_state;

// Re-export commonly used types
pub use voice::*;
pub use score::*;
pub use errors::EditError;
pub use editor_state::{EditorState, HoverState, NoteValue};

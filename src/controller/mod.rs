//! Interaction controller
//!
//! Turns pointer and button input into state transitions. Every transition
//! is a pure function from the previous `EditorState` to the next one.

pub mod commands;
pub mod dispatch;

pub use commands::{Command, PointerInput};
pub use dispatch::{dispatch, Outcome};

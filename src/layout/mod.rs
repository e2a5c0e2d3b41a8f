//! Staff layout
//!
//! Computes the Frame consumed by the JavaScript renderer: staff rows,
//! grid lines, positioned notes and the hover preview.

pub mod display_list;
pub mod engine;

pub use display_list::{Frame, GridLineKind, RenderGridLine, RenderHover, RenderNote, RenderRow, ToolbarState};
pub use engine::{build_frame, FrameBuilder};

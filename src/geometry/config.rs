//! Staff configuration
//!
//! Build-time constants for the staff drawing surface. The front end may
//! override any subset of fields when it initialises the editor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How measures are laid out on the drawing surface
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum RowLayout {
    /// One continuous, horizontally scrolling strip
    Strip,
    /// Fixed number of measures per row, rows stacked vertically
    Rows {
        #[serde(rename = "measuresPerRow")]
        measures_per_row: usize,
    },
}

impl Default for RowLayout {
    fn default() -> Self {
        RowLayout::Strip
    }
}

/// Staff geometry and interaction bounds
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StaffConfig {
    /// Width of one default measure, padding included
    pub staff_width: f32,
    pub padding_x: f32,
    /// Y of the top staff line within a row
    pub top_line_y: f32,
    pub line_spacing: f32,
    pub line_count: usize,
    pub subdivisions_per_measure: usize,
    pub subdivisions_per_beat: usize,
    pub row_layout: RowLayout,
    pub row_height: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            staff_width: 800.0,
            padding_x: 40.0,
            top_line_y: 60.0,
            line_spacing: 16.0,
            line_count: 5,
            subdivisions_per_measure: 16,
            subdivisions_per_beat: 4,
            row_layout: RowLayout::Strip,
            row_height: 160.0,
            zoom_min: 0.5,
            zoom_max: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("line spacing must be positive, got {0}")]
    LineSpacing(f32),

    #[error("staff content width must be positive (width {width}, padding {padding})")]
    ContentWidth { width: f32, padding: f32 },

    #[error("a measure needs at least 2 subdivisions, got {0}")]
    Subdivisions(usize),

    #[error("subdivisions per beat must be at least 1")]
    BeatLength,

    #[error("rows need at least one measure each")]
    EmptyRow,

    #[error("row height must be positive, got {0}")]
    RowHeight(f32),

    #[error("invalid zoom range {min}..{max}")]
    ZoomRange { min: f32, max: f32 },
}

impl StaffConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.line_spacing > 0.0) {
            return Err(ConfigError::LineSpacing(self.line_spacing));
        }
        if !(self.staff_width - 2.0 * self.padding_x > 0.0) {
            return Err(ConfigError::ContentWidth {
                width: self.staff_width,
                padding: self.padding_x,
            });
        }
        if self.subdivisions_per_measure < 2 {
            return Err(ConfigError::Subdivisions(self.subdivisions_per_measure));
        }
        if self.subdivisions_per_beat == 0 {
            return Err(ConfigError::BeatLength);
        }
        if let RowLayout::Rows { measures_per_row: 0 } = self.row_layout {
            return Err(ConfigError::EmptyRow);
        }
        if !(self.row_height > 0.0) {
            return Err(ConfigError::RowHeight(self.row_height));
        }
        if !(self.zoom_min > 0.0 && self.zoom_min <= self.zoom_max) {
            return Err(ConfigError::ZoomRange {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        Ok(())
    }

    /// Clamp a zoom value into the configured range
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.zoom_min, self.zoom_max)
    }
}

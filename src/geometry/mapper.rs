//! Pixel <-> grid mapping
//!
//! Converts between staff-local pixel coordinates and logical grid
//! addresses (measure, column, voice). All coordinates here are in
//! unzoomed staff units; zoom is applied by the caller.
//!
//! Horizontal spacing is fixed: one column step is the content width of a
//! default measure divided by its subdivision gaps. Measures that grew
//! through insertion simply extend further to the right.

use serde::{Deserialize, Serialize};

use super::config::{RowLayout, StaffConfig};
use crate::models::{Score, VoiceId, VOICES};

/// Snap radius around a voice line, in half line-spacings
const VOICE_SNAP_FACTOR: f32 = 1.25;

/// Fully resolved grid address under the pointer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAddress {
    pub measure_index: usize,
    pub global_column: usize,
    pub column: usize,
    pub voice: VoiceId,
}

/// Horizontal extent of one layout row
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpan {
    pub row: usize,
    pub first_measure: usize,
    /// One past the last measure on this row
    pub end_measure: usize,
    pub first_column: usize,
    pub column_count: usize,
}

pub struct GeometryMapper<'a> {
    config: &'a StaffConfig,
}

impl<'a> GeometryMapper<'a> {
    pub fn new(config: &'a StaffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StaffConfig {
        self.config
    }

    /// Distance between adjacent grid lines
    pub fn column_step(&self) -> f32 {
        let content_width = self.config.staff_width - 2.0 * self.config.padding_x;
        content_width / (self.config.subdivisions_per_measure - 1) as f32
    }

    pub fn half_spacing(&self) -> f32 {
        self.config.line_spacing / 2.0
    }

    pub fn snap_threshold(&self) -> f32 {
        VOICE_SNAP_FACTOR * self.half_spacing()
    }

    /// X of a column, counted from the start of its row
    pub fn pixel_x_for_column(&self, column: usize) -> f32 {
        self.config.padding_x + column as f32 * self.column_step()
    }

    /// Y of a staff position within a row (1 = top line)
    pub fn pixel_y_for_voice(&self, position: i32) -> f32 {
        self.config.top_line_y + (position - 1) as f32 * self.half_spacing()
    }

    /// Y of each staff line within a row, top first
    pub fn staff_line_ys(&self) -> Vec<f32> {
        (0..self.config.line_count)
            .map(|i| self.config.top_line_y + i as f32 * self.config.line_spacing)
            .collect()
    }

    /// Inverse of `pixel_x_for_column`, rounded; `None` outside `[0, total_columns)`
    pub fn nearest_column(&self, x: f32, total_columns: usize) -> Option<usize> {
        let raw = ((x - self.config.padding_x) / self.column_step()).round();
        if !raw.is_finite() || raw < 0.0 {
            return None;
        }
        let column = raw as usize;
        (column < total_columns).then_some(column)
    }

    /// Closest voice to `y`, or `None` when every voice is beyond the snap radius
    pub fn nearest_voice(&self, y: f32) -> Option<VoiceId> {
        let (voice, distance) = VOICES
            .iter()
            .map(|v| (v.id, (self.pixel_y_for_voice(v.position) - y).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        (distance <= self.snap_threshold()).then_some(voice)
    }

    pub fn measures_per_row(&self, measure_count: usize) -> usize {
        match self.config.row_layout {
            RowLayout::Strip => measure_count.max(1),
            RowLayout::Rows { measures_per_row } => measures_per_row.max(1),
        }
    }

    pub fn row_of_measure(&self, score: &Score, measure_index: usize) -> usize {
        measure_index / self.measures_per_row(score.measure_count())
    }

    pub fn row_count(&self, score: &Score) -> usize {
        let per_row = self.measures_per_row(score.measure_count());
        (score.measure_count() + per_row - 1) / per_row
    }

    pub fn row_y_offset(&self, row: usize) -> f32 {
        row as f32 * self.config.row_height
    }

    /// Measures and columns covered by a row
    pub fn row_span(&self, score: &Score, row: usize) -> RowSpan {
        let per_row = self.measures_per_row(score.measure_count());
        let first_measure = (row * per_row).min(score.measure_count());
        let end_measure = (first_measure + per_row).min(score.measure_count());
        let column_count = score.measures()[first_measure..end_measure]
            .iter()
            .map(|m| m.subdivisions)
            .sum();

        RowSpan {
            row,
            first_measure,
            end_measure,
            first_column: score.measure_offset(first_measure),
            column_count,
        }
    }

    pub fn row_spans(&self, score: &Score) -> Vec<RowSpan> {
        (0..self.row_count(score))
            .map(|row| self.row_span(score, row))
            .collect()
    }

    /// Staff-local (x, y-offset of the row) for a global column
    pub fn position_for_global_column(&self, score: &Score, global_column: usize) -> (f32, f32) {
        let location = score.locate(global_column);
        let row = self.row_of_measure(score, location.measure_index);
        let span = self.row_span(score, row);
        let x = self.pixel_x_for_column(global_column.saturating_sub(span.first_column));
        (x, self.row_y_offset(row))
    }

    /// Resolve a staff-local pointer position to a grid address
    pub fn hit_test(&self, score: &Score, x: f32, y: f32) -> Option<GridAddress> {
        let row = match self.config.row_layout {
            RowLayout::Strip => 0,
            RowLayout::Rows { .. } => {
                let raw = (y / self.config.row_height).floor();
                if !raw.is_finite() || raw < 0.0 {
                    return None;
                }
                raw as usize
            }
        };
        if row >= self.row_count(score) {
            return None;
        }

        let span = self.row_span(score, row);
        let local_column = self.nearest_column(x, span.column_count)?;
        let voice = self.nearest_voice(y - self.row_y_offset(row))?;

        let global_column = span.first_column + local_column;
        let location = score.locate(global_column);
        log::trace!(
            "hit_test ({:.1}, {:.1}) -> measure {} column {} voice {}",
            x,
            y,
            location.measure_index,
            location.column,
            voice
        );

        Some(GridAddress {
            measure_index: location.measure_index,
            global_column,
            column: location.column,
            voice,
        })
    }

    /// Unzoomed drawing surface size (width, height)
    pub fn canvas_size(&self, score: &Score) -> (f32, f32) {
        let widest = self
            .row_spans(score)
            .iter()
            .map(|s| s.column_count)
            .max()
            .unwrap_or(0);
        let width = 2.0 * self.config.padding_x + widest.saturating_sub(1) as f32 * self.column_step();
        let height = self.row_count(score) as f32 * self.config.row_height;
        (width.max(self.config.staff_width), height)
    }
}

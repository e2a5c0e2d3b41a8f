//! Frame computation
//!
//! Takes the editor state and produces a Frame. Nothing here is cached:
//! offsets and sorted note lists are recomputed from the score each time.

use super::display_list::*;
use crate::geometry::{GeometryMapper, RowSpan};
use crate::models::{EditorState, GlobalNote, HoverState, Score, VoiceId};

/// Computes frames for a given editor state
pub struct FrameBuilder<'a> {
    state: &'a EditorState,
    mapper: GeometryMapper<'a>,
}

impl<'a> FrameBuilder<'a> {
    pub fn new(state: &'a EditorState) -> Self {
        Self {
            state,
            mapper: state.mapper(),
        }
    }

    pub fn build(&self) -> Frame {
        let score = &self.state.score;
        let zoom = self.state.zoom;
        let (width, height) = self.mapper.canvas_size(score);

        let rows = self
            .mapper
            .row_spans(score)
            .iter()
            .map(|span| self.render_row(span))
            .collect();

        let notes = score
            .global_notes()
            .iter()
            .map(|n| self.render_note(n))
            .collect();

        let hover = self.state.hover().map(|h| self.render_hover(h));

        Frame {
            zoom,
            width: width * zoom,
            height: height * zoom,
            rows,
            notes,
            hover,
            toolbar: self.toolbar(),
        }
    }

    fn render_row(&self, span: &RowSpan) -> RenderRow {
        let score = &self.state.score;
        let config = self.mapper.config();
        let y_offset = self.mapper.row_y_offset(span.row);
        let current = score.current_index();

        let mut grid_lines = Vec::with_capacity(span.column_count);
        let mut local_column = 0;
        for measure_index in span.first_measure..span.end_measure {
            let measure = &score.measures()[measure_index];
            for column in 0..measure.subdivisions {
                let kind = if column == 0 {
                    GridLineKind::Barline
                } else if column % config.subdivisions_per_beat == 0 {
                    GridLineKind::Beat
                } else {
                    GridLineKind::Subdivision
                };
                grid_lines.push(RenderGridLine {
                    x: self.mapper.pixel_x_for_column(local_column),
                    global_column: span.first_column + local_column,
                    measure_index,
                    kind,
                    current: measure_index == current,
                });
                local_column += 1;
            }
        }

        RenderRow {
            row: span.row,
            y_offset,
            staff_lines: self
                .mapper
                .staff_line_ys()
                .into_iter()
                .map(|y| y + y_offset)
                .collect(),
            x_start: config.padding_x,
            x_end: self
                .mapper
                .pixel_x_for_column(span.column_count.saturating_sub(1)),
            grid_lines,
        }
    }

    fn place(
        &self,
        measure_index: usize,
        global_column: usize,
        column: usize,
        voice: VoiceId,
        duration: usize,
    ) -> RenderNote {
        let (x, y_offset) = self
            .mapper
            .position_for_global_column(&self.state.score, global_column);
        let info = voice.voice();
        RenderNote {
            measure_index,
            global_column,
            column,
            voice,
            duration,
            x,
            y: y_offset + self.mapper.pixel_y_for_voice(info.position),
            width: duration as f32 * self.mapper.column_step(),
            head: info.head,
            stem: info.stem,
        }
    }

    fn render_note(&self, note: &GlobalNote) -> RenderNote {
        self.place(
            note.measure_index,
            note.global_column,
            note.column,
            note.voice,
            note.duration,
        )
    }

    fn render_hover(&self, hover: &HoverState) -> RenderHover {
        RenderHover {
            note: self.place(
                hover.measure_index,
                hover.global_column,
                hover.column,
                hover.voice,
                hover.duration,
            ),
            placeable: is_free(&self.state.score, hover),
        }
    }

    fn toolbar(&self) -> ToolbarState {
        let state = self.state;
        ToolbarState {
            current_measure: state.score.current_index(),
            measure_count: state.score.measure_count(),
            selected_duration: state.note_value.subdivisions(),
            can_prev: state.can_go_prev(),
            can_next: state.can_go_next(),
            can_paste: state.can_paste(),
            can_clear: state.can_clear(),
        }
    }
}

fn is_free(score: &Score, hover: &HoverState) -> bool {
    score
        .measure(hover.measure_index)
        .map(|m| m.note_at(hover.column, hover.voice).is_none())
        .unwrap_or(false)
}

/// Convenience entry point
pub fn build_frame(state: &EditorState) -> Frame {
    FrameBuilder::new(state).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{RowLayout, StaffConfig};
    use crate::models::{HeadShape, StemDirection};

    #[test]
    fn test_empty_frame() {
        let state = EditorState::default();
        let frame = build_frame(&state);

        assert_eq!(frame.rows.len(), 1);
        assert!(frame.notes.is_empty());
        assert!(frame.hover.is_none());

        let row = &frame.rows[0];
        assert_eq!(row.staff_lines, vec![60.0, 76.0, 92.0, 108.0, 124.0]);
        assert_eq!(row.grid_lines.len(), 16);
        assert_eq!(row.grid_lines[0].kind, GridLineKind::Barline);
        assert_eq!(row.grid_lines[4].kind, GridLineKind::Beat);
        assert_eq!(row.grid_lines[5].kind, GridLineKind::Subdivision);
        assert_eq!(row.x_end, 760.0);
    }

    #[test]
    fn test_note_geometry() {
        let mut state = EditorState::default();
        state.score.insert_note(0, 2, VoiceId::Kick, 2).unwrap();

        let frame = build_frame(&state);
        let note = frame.notes[0];
        assert_eq!(note.x, 136.0);
        assert_eq!(note.y, 116.0);
        assert_eq!(note.width, 96.0);
        assert_eq!(note.head, HeadShape::Circle);
        assert_eq!(note.stem, StemDirection::Down);
    }

    #[test]
    fn test_rows_offset_notes_and_lines() {
        let mut config = StaffConfig::default();
        config.row_layout = RowLayout::Rows { measures_per_row: 1 };
        let mut state = EditorState::new(config);
        state.score.add_measure();
        state.score.insert_note(1, 1, VoiceId::HiHat, 1).unwrap();

        let frame = build_frame(&state);
        assert_eq!(frame.rows.len(), 2);
        assert_eq!(frame.rows[1].y_offset, 160.0);
        assert_eq!(frame.rows[1].staff_lines[0], 220.0);
        assert_eq!(frame.rows[1].grid_lines[0].global_column, 16);
        assert!(frame.rows[1].grid_lines[0].current);
        assert!(!frame.rows[0].grid_lines[0].current);

        let note = frame.notes[0];
        assert_eq!(note.x, 88.0);
        assert_eq!(note.y, 160.0 + 52.0);
        assert_eq!(frame.height, 320.0);
    }

    #[test]
    fn test_canvas_size_follows_zoom() {
        let mut state = EditorState::default();
        let (width, height) = state.mapper().canvas_size(&state.score);
        state.set_zoom(2.0);

        let frame = build_frame(&state);
        assert_eq!(frame.width, width * 2.0);
        assert_eq!(frame.height, height * 2.0);
        // Positions stay in staff units
        assert_eq!(frame.rows[0].staff_lines[0], 60.0);
    }

    #[test]
    fn test_hover_placeable_flag() {
        let mut state = EditorState::default();
        state.score.insert_note(0, 3, VoiceId::Snare, 1).unwrap();
        state.set_hover(Some(HoverState {
            measure_index: 0,
            global_column: 3,
            column: 3,
            voice: VoiceId::Snare,
            duration: 1,
        }));
        assert!(!build_frame(&state).hover.unwrap().placeable);

        state.hover.as_mut().unwrap().voice = VoiceId::Tom;
        assert!(build_frame(&state).hover.unwrap().placeable);
    }
}

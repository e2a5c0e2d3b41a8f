// End-to-end interaction flows: pointer -> hover -> click -> score -> frame

use drum_sketch_wasm::controller::{dispatch, Command, Outcome, PointerInput};
use drum_sketch_wasm::geometry::{GeometryMapper, RowLayout, StaffConfig};
use drum_sketch_wasm::layout::build_frame;
use drum_sketch_wasm::models::{EditError, EditorState, Note, NoteValue, VoiceId, VOICES};

/// Pointer over (column, voice) of row 0, with a canvas origin of (10, 20)
fn hover_cmd(state: &EditorState, column: usize, voice: VoiceId) -> Command {
    let mapper = GeometryMapper::new(&state.config);
    let x = mapper.pixel_x_for_column(column) * state.zoom;
    let y = mapper.pixel_y_for_voice(voice.voice().position) * state.zoom;
    Command::PointerMove {
        pointer: PointerInput {
            client_x: x + 10.0,
            client_y: y + 20.0,
            bounds_left: 10.0,
            bounds_top: 20.0,
        },
    }
}

fn apply(state: EditorState, command: Command) -> (EditorState, Outcome) {
    dispatch(state, &command)
}

fn place(state: EditorState, column: usize, voice: VoiceId) -> (EditorState, Outcome) {
    let cmd = hover_cmd(&state, column, voice);
    let (state, _) = apply(state, cmd);
    apply(state, Command::Click)
}

#[test]
fn test_click_walkthrough() {
    let state = EditorState::default();

    let (state, outcome) = place(state, 4, VoiceId::Snare);
    assert_eq!(outcome, Outcome::Applied);

    let (state, _) = apply(state, Command::SelectDuration { value: NoteValue::Eighth });
    let (state, outcome) = place(state, 2, VoiceId::HiHat);
    assert_eq!(outcome, Outcome::Applied);

    let measure = &state.score.measures()[0];
    assert_eq!(measure.subdivisions, 19);
    assert_eq!(
        measure.notes,
        vec![Note::new(2, VoiceId::HiHat, 2), Note::new(6, VoiceId::Snare, 1)]
    );

    let (state, _) = apply(state, Command::SelectDuration { value: NoteValue::Sixteenth });
    let before = state.score.clone();
    let (state, outcome) = place(state, 6, VoiceId::Snare);
    assert_eq!(
        outcome,
        Outcome::Rejected(EditError::SlotOccupied { column: 6, voice: VoiceId::Snare })
    );
    assert_eq!(state.score, before);
    assert!(state.hover.is_none());
}

#[test]
fn test_hover_cleared_by_leave_and_navigation() {
    let state = EditorState::default();
    let cmd = hover_cmd(&state, 1, VoiceId::Kick);
    let (state, _) = apply(state, cmd);
    assert!(state.hover.is_some());

    let (state, _) = apply(state, Command::PointerLeave);
    assert!(state.hover.is_none());

    let cmd = hover_cmd(&state, 1, VoiceId::Kick);
    let (state, _) = apply(state, cmd);
    let (state, _) = apply(state, Command::AddMeasure);
    assert!(state.hover.is_none());
    assert_eq!(state.score.current_index(), 1);

    let cmd = hover_cmd(&state, 1, VoiceId::Kick);
    let (state, _) = apply(state, cmd);
    let (state, outcome) = apply(state, Command::NextMeasure);
    assert_eq!(outcome, Outcome::Rejected(EditError::AtBoundary("last")));
    assert!(state.hover.is_none());
    assert_eq!(state.score.current_index(), 1);

    let (state, outcome) = apply(state, Command::PrevMeasure);
    assert_eq!(outcome, Outcome::Applied);
    let (state, outcome) = apply(state, Command::PrevMeasure);
    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert_eq!(state.score.current_index(), 0);
}

#[test]
fn test_zoom_does_not_change_grid() {
    let state = EditorState::default();
    let (state, _) = apply(state, Command::SetZoom { zoom: 1.5 });
    let cmd = hover_cmd(&state, 9, VoiceId::Tom);
    let (state, _) = apply(state, cmd);

    let hover = state.hover.unwrap();
    assert_eq!(hover.column, 9);
    assert_eq!(hover.voice, VoiceId::Tom);

    let frame = build_frame(&state);
    assert_eq!(frame.zoom, 1.5);
    assert_eq!(frame.hover.unwrap().note.x, GeometryMapper::new(&state.config).pixel_x_for_column(9));
}

#[test]
fn test_copy_paste_clear_buttons() {
    let state = EditorState::default();
    let (state, _) = place(state, 0, VoiceId::Kick);
    let (state, _) = place(state, 0, VoiceId::HiHat);
    let (state, outcome) = apply(state, Command::CopyMeasure);
    assert_eq!(outcome, Outcome::Applied);

    let (state, _) = apply(state, Command::AddMeasure);
    let (state, outcome) = apply(state, Command::PasteMeasure);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(state.score.measures()[1], state.score.measures()[0]);

    let frame = build_frame(&state);
    assert_eq!(frame.notes.len(), 4);
    assert!(frame.toolbar.can_paste);
    assert!(frame.toolbar.can_clear);
    assert!(!frame.toolbar.can_next);

    let (state, outcome) = apply(state, Command::ClearMeasure);
    assert_eq!(outcome, Outcome::Applied);
    assert!(state.score.measures()[1].is_empty());
    assert_eq!(state.score.measures()[0].notes.len(), 2);

    let (_, outcome) = apply(state, Command::ClearMeasure);
    assert_eq!(outcome, Outcome::Unchanged);
}

#[test]
fn test_rows_layout_click_lands_in_second_row() {
    let mut config = StaffConfig::default();
    config.row_layout = RowLayout::Rows { measures_per_row: 1 };
    let state = EditorState::new(config);
    let (state, _) = apply(state, Command::AddMeasure);

    let mapper = GeometryMapper::new(&state.config);
    let x = mapper.pixel_x_for_column(3);
    let y = mapper.row_y_offset(1) + mapper.pixel_y_for_voice(VoiceId::Snare.voice().position);
    let (state, _) = apply(
        state,
        Command::PointerMove {
            pointer: PointerInput {
                client_x: x,
                client_y: y,
                bounds_left: 0.0,
                bounds_top: 0.0,
            },
        },
    );
    let (state, outcome) = apply(state, Command::Click);
    assert_eq!(outcome, Outcome::Applied);
    assert!(state.score.measures()[0].is_empty());
    assert_eq!(state.score.measures()[1].notes, vec![Note::new(3, VoiceId::Snare, 1)]);

    let frame = build_frame(&state);
    assert_eq!(frame.rows.len(), 2);
    assert_eq!(frame.notes[0].y, y);
    assert_eq!(frame.notes[0].x, x);
}

#[test]
fn test_frame_lists_all_voices_in_order() {
    let mut state = EditorState::default();
    for voice in VOICES.iter().rev() {
        state.score.insert_note(0, 0, voice.id, 1).unwrap();
    }
    let frame = build_frame(&state);
    let order: Vec<_> = frame.notes.iter().map(|n| n.voice).collect();
    // Each insert at column 0 pushes the earlier ones right, so the last
    // inserted voice (hi-hat) ends up first
    assert_eq!(
        order,
        vec![VoiceId::HiHat, VoiceId::Snare, VoiceId::Tom, VoiceId::Kick]
    );
}

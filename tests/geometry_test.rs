// Pixel <-> grid mapping properties

use drum_sketch_wasm::geometry::{GeometryMapper, RowLayout, StaffConfig};
use drum_sketch_wasm::models::{Score, VoiceId, VOICES};

#[test]
fn test_column_round_trip_error_within_half_step() {
    let config = StaffConfig::default();
    let mapper = GeometryMapper::new(&config);
    let step = mapper.column_step();
    let total = 48;

    let mut x = 0.0f32;
    while x < 2500.0 {
        if let Some(column) = mapper.nearest_column(x, total) {
            let back = mapper.pixel_x_for_column(column);
            assert!(
                (back - x).abs() <= step / 2.0 + 1e-3,
                "x={} column={} back={}",
                x,
                column,
                back
            );
            assert!(column < total);
        }
        x += 3.7;
    }
}

#[test]
fn test_every_column_maps_to_itself() {
    let config = StaffConfig::default();
    let mapper = GeometryMapper::new(&config);
    for column in 0..40 {
        let x = mapper.pixel_x_for_column(column);
        assert_eq!(mapper.nearest_column(x, 40), Some(column));
    }
    assert_eq!(mapper.nearest_column(mapper.pixel_x_for_column(40), 40), None);
}

#[test]
fn test_nearest_voice_is_closest_or_none() {
    let config = StaffConfig::default();
    let mapper = GeometryMapper::new(&config);
    let threshold = mapper.snap_threshold();

    let mut y = 0.0f32;
    while y < 200.0 {
        let closest = VOICES
            .iter()
            .map(|v| (v.id, (mapper.pixel_y_for_voice(v.position) - y).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();

        match mapper.nearest_voice(y) {
            Some(voice) => {
                assert!(closest.1 <= threshold);
                let distance = (mapper.pixel_y_for_voice(voice.voice().position) - y).abs();
                assert_eq!(distance, closest.1);
            }
            None => assert!(closest.1 > threshold, "y={} should snap", y),
        }
        y += 0.5;
    }
}

#[test]
fn test_voice_lines_snap_exactly() {
    let config = StaffConfig::default();
    let mapper = GeometryMapper::new(&config);
    for voice in VOICES.iter() {
        assert_eq!(mapper.nearest_voice(mapper.pixel_y_for_voice(voice.position)), Some(voice.id));
    }
}

#[test]
fn test_hit_test_after_growth() {
    let config = StaffConfig::default();
    let mapper = GeometryMapper::new(&config);
    let mut score = Score::default();
    score.insert_note(0, 0, VoiceId::Kick, 4).unwrap();
    score.add_measure();

    // Measure 0 now spans 20 columns; column 20 belongs to measure 1
    let x = mapper.pixel_x_for_column(20);
    let address = mapper.hit_test(&score, x, 84.0).unwrap();
    assert_eq!(address.measure_index, 1);
    assert_eq!(address.column, 0);

    let x = mapper.pixel_x_for_column(19);
    let address = mapper.hit_test(&score, x, 84.0).unwrap();
    assert_eq!(address.measure_index, 0);
    assert_eq!(address.column, 19);

    assert!(mapper.hit_test(&score, mapper.pixel_x_for_column(36), 84.0).is_none());
}

#[test]
fn test_rows_restart_columns_per_row() {
    let mut config = StaffConfig::default();
    config.row_layout = RowLayout::Rows { measures_per_row: 2 };
    let mapper = GeometryMapper::new(&config);

    let mut score = Score::default();
    for _ in 0..4 {
        score.add_measure();
    }
    assert_eq!(mapper.row_count(&score), 3);

    let spans = mapper.row_spans(&score);
    assert_eq!(spans[1].first_measure, 2);
    assert_eq!(spans[1].first_column, 32);
    assert_eq!(spans[2].end_measure, 5);
    assert_eq!(spans[2].column_count, 16);

    let y = mapper.row_y_offset(2) + mapper.pixel_y_for_voice(2);
    let address = mapper.hit_test(&score, mapper.pixel_x_for_column(3), y).unwrap();
    assert_eq!(address.measure_index, 4);
    assert_eq!(address.global_column, 67);
    assert_eq!(address.voice, VoiceId::Tom);
}

// Measure partitioning against the configured beat capacity

use num_rational::Rational32;
use part_editor_wasm::layout::{split_into_measures, MeasureConfig};
use part_editor_wasm::models::{Duration, NoteEvent};
use part_editor_wasm::parse::parse_notes_input;

fn total_beats(measure: &[NoteEvent]) -> Rational32 {
    measure
        .iter()
        .map(NoteEvent::beats)
        .fold(Rational32::from_integer(0), |acc, b| acc + b)
}

#[test]
fn test_eight_quarters_split_into_two_full_measures() {
    let notes = parse_notes_input("C4/q, D4/q, E4/q, F4/q, G4/q, A4/q, B4/q, C5/q").unwrap();
    let measures = split_into_measures(&notes, &MeasureConfig::default());

    assert_eq!(measures.len(), 2);
    assert_eq!(measures[0].len(), 4);
    assert_eq!(measures[1].len(), 4);
    assert_eq!(measures[1][0].pitch_notation(), "G4");
}

#[test]
fn test_empty_part_gets_one_whole_rest_measure() {
    let notes = parse_notes_input("").unwrap();
    let measures = split_into_measures(&notes, &MeasureConfig::default());

    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].len(), 1);
    assert!(measures[0][0].rest);
    assert_eq!(measures[0][0].duration, Duration::Whole);
    assert_eq!(measures[0][0].pitch_notation(), "B4");
}

#[test]
fn test_partial_tail_measure_is_kept() {
    let notes = parse_notes_input("C4/w, D4/q, E4/8").unwrap();
    let measures = split_into_measures(&notes, &MeasureConfig::default());

    assert_eq!(measures.len(), 2);
    assert_eq!(total_beats(&measures[1]), Rational32::new(3, 2));
}

#[test]
fn test_capacity_is_configuration_not_a_constant() {
    // Waltz-time capacity: three beats per measure.
    let config = MeasureConfig {
        beats_per_measure: Rational32::from_integer(3),
    };
    let notes = parse_notes_input("C4/q, D4/q, E4/q, F4/q, G4/q, A4/q").unwrap();
    let measures = split_into_measures(&notes, &config);

    assert_eq!(measures.len(), 2);
    for measure in &measures {
        assert_eq!(total_beats(measure), Rational32::from_integer(3));
    }
}

#[test]
fn test_rests_count_toward_capacity_like_notes() {
    let notes = parse_notes_input("C4/h, B4/h/r, D4/q").unwrap();
    let measures = split_into_measures(&notes, &MeasureConfig::default());

    assert_eq!(measures.len(), 2);
    assert_eq!(measures[0].len(), 2);
    assert!(measures[0][1].rest);
}

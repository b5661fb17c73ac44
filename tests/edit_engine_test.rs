// Edit engine scenarios: update, shrink backfill, rest toggling, delete

use part_editor_wasm::edit::{
    delete_selected_note, update_selected_note, EditError, PendingEdit,
};
use part_editor_wasm::layout::MeasureConfig;
use part_editor_wasm::models::{Duration, Part, PitchLetter};
use part_editor_wasm::parse::parse_notes_input;

fn part_with(notes_input: &str) -> Part {
    Part::new("Test Part", notes_input)
}

fn edit(
    note_index: usize,
    pitch: PitchLetter,
    duration: Duration,
    rest: bool,
) -> PendingEdit {
    PendingEdit {
        note_index,
        pitch,
        octave: 4,
        duration,
        rest,
    }
}

#[test]
fn test_update_with_equal_duration_has_no_backfill() {
    let part = part_with("C4/q, D4/q, E4/q, F4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        update_selected_note(&part, &notes, &edit(1, PitchLetter::G, Duration::Quarter, false))
            .unwrap();

    assert_eq!(updated.notes_input, "C4/q, G4/q, E4/q, F4/q");
    assert_eq!(updated.name, "Test Part");
}

#[test]
fn test_shrink_quarter_to_eighth_backfills_one_eighth_rest() {
    let part = part_with("C4/q, D4/q, E4/q, F4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        update_selected_note(&part, &notes, &edit(1, PitchLetter::D, Duration::Eighth, false))
            .unwrap();

    assert_eq!(updated.notes_input, "C4/q, D4/8, B4/8/r, E4/q, F4/q");
}

#[test]
fn test_shrink_quarter_to_sixteenth_backfills_eighth_then_sixteenth() {
    let part = part_with("C4/q, D4/q, E4/q, F4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated = update_selected_note(
        &part,
        &notes,
        &edit(1, PitchLetter::D, Duration::Sixteenth, false),
    )
    .unwrap();

    assert_eq!(
        updated.notes_input,
        "C4/q, D4/16, B4/8/r, B4/16/r, E4/q, F4/q"
    );
}

#[test]
fn test_shrink_half_to_quarter_backfills_one_quarter_rest() {
    let part = part_with("C4/h, D4/h");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        update_selected_note(&part, &notes, &edit(0, PitchLetter::C, Duration::Quarter, false))
            .unwrap();

    assert_eq!(updated.notes_input, "C4/q, B4/q/r, D4/h");
}

#[test]
fn test_growth_does_not_backfill() {
    // Accepted asymmetry: growing a note lets measure boundaries drift.
    let part = part_with("C4/q, D4/q, E4/q, F4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        update_selected_note(&part, &notes, &edit(1, PitchLetter::D, Duration::Half, false))
            .unwrap();

    assert_eq!(updated.notes_input, "C4/q, D4/h, E4/q, F4/q");
}

#[test]
fn test_note_to_rest_preserves_other_fields() {
    let part = part_with("C4/q, D4/q, E4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        update_selected_note(&part, &notes, &edit(1, PitchLetter::B, Duration::Quarter, true))
            .unwrap();

    assert_eq!(updated.notes_input, "C4/q, B4/q/r, E4/q");
}

#[test]
fn test_rest_to_note() {
    let part = part_with("C4/q, B4/q/r, E4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        update_selected_note(&part, &notes, &edit(1, PitchLetter::D, Duration::Quarter, false))
            .unwrap();

    assert_eq!(updated.notes_input, "C4/q, D4/q, E4/q");
}

#[test]
fn test_delete_appends_trailing_half_measure_rest() {
    let part = part_with("C4/q, D4/q, E4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        delete_selected_note(&part, &notes, 0, &MeasureConfig::default()).unwrap();

    assert_eq!(updated.notes_input, "D4/q, E4/q, B4/h/r");
}

#[test]
fn test_delete_side_effect_regardless_of_position() {
    let part = part_with("C4/q, D4/q, E4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let updated =
        delete_selected_note(&part, &notes, 2, &MeasureConfig::default()).unwrap();

    assert_eq!(updated.notes_input, "C4/q, D4/q, B4/h/r");
}

#[test]
fn test_operations_never_mutate_the_caller_part() {
    let part = part_with("C4/q, D4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    update_selected_note(&part, &notes, &edit(0, PitchLetter::A, Duration::Eighth, false))
        .unwrap();
    delete_selected_note(&part, &notes, 1, &MeasureConfig::default()).unwrap();

    assert_eq!(part.notes_input, "C4/q, D4/q");
    assert_eq!(notes.len(), 2);
}

#[test]
fn test_out_of_range_index_fails_both_operations() {
    let part = part_with("C4/q");
    let notes = parse_notes_input(&part.notes_input).unwrap();

    let err = update_selected_note(&part, &notes, &edit(5, PitchLetter::A, Duration::Quarter, false))
        .unwrap_err();
    assert_eq!(err, EditError::NoteIndexOutOfRange { index: 5, len: 1 });

    let err = delete_selected_note(&part, &notes, 1, &MeasureConfig::default()).unwrap_err();
    assert_eq!(err, EditError::NoteIndexOutOfRange { index: 1, len: 1 });
}

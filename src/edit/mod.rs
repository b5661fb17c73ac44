//! Atomic edit operations over a parsed note sequence
//!
//! Each operation takes a value snapshot (the owning `Part` plus the
//! sequence parsed from it), applies one mutation, and returns a new
//! `Part` holding the re-serialized notation text. Nothing the caller
//! holds is mutated; partial state is never visible.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::MeasureConfig;
use crate::models::{Duration, NoteEvent, Part, PitchLetter};
use crate::parse::serialize_notes;

/// Immutable staging value for a single-note edit.
///
/// Built from a hit-tested note (or by an explicit "add" action in the
/// host UI), passed into an operation once, then discarded. Rests are
/// staged exactly like pitched notes; `rest` defaults to `false` when
/// the host omits it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingEdit {
    pub note_index: usize,
    pub pitch: PitchLetter,
    pub octave: i8,
    pub duration: Duration,
    #[serde(default)]
    pub rest: bool,
}

impl PendingEdit {
    /// Stage an edit from a located note event, carrying all of its
    /// fields including the rest flag.
    pub fn from_event(event: &NoteEvent) -> Self {
        PendingEdit {
            note_index: event.note_index,
            pitch: event.pitch,
            octave: event.octave,
            duration: event.duration,
            rest: event.rest,
        }
    }
}

/// Precondition failures of the edit engine.
///
/// An out-of-range index means the caller supplied an index that was
/// not obtained from the last parse. The operation is aborted; the
/// caller-held state is untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditError {
    #[error("note index {index} out of range for sequence of {len} events")]
    NoteIndexOutOfRange { index: usize, len: usize },
}

/// Replace the event at `edit.note_index` with the staged record.
///
/// If the new duration is strictly shorter than the replaced one, the
/// freed gap (relative to the original duration, not to measure
/// position) is covered exactly by filler rests inserted immediately
/// after the edited note, so the running beat total within its measure
/// is unchanged. Growth or equal duration inserts nothing: measure
/// boundaries are allowed to drift on growth. That asymmetry is
/// deliberate, kept for compatibility with existing part data.
pub fn update_selected_note(
    part: &Part,
    notes: &[NoteEvent],
    edit: &PendingEdit,
) -> Result<Part, EditError> {
    if edit.note_index >= notes.len() {
        return Err(EditError::NoteIndexOutOfRange {
            index: edit.note_index,
            len: notes.len(),
        });
    }

    let mut updated = notes.to_vec();
    let old_beats = updated[edit.note_index].beats();
    updated[edit.note_index] = NoteEvent {
        pitch: edit.pitch,
        octave: edit.octave,
        duration: edit.duration,
        rest: edit.rest,
        note_index: edit.note_index,
    };

    let new_beats = edit.duration.beats();
    if new_beats < old_beats {
        let gap = old_beats - new_beats;
        log::debug!(
            "backfilling {} beat(s) after note {}",
            gap,
            edit.note_index
        );
        for (offset, filler) in filler_rests(gap).into_iter().enumerate() {
            updated.insert(edit.note_index + 1 + offset, filler);
        }
    }

    Ok(part.with_notes_input(serialize_notes(&updated)))
}

/// Remove the event at `note_index`, then append a single trailing
/// half-measure rest to the whole sequence, unconditionally, so a
/// measure-based renderer never ends up with a degenerate tail.
pub fn delete_selected_note(
    part: &Part,
    notes: &[NoteEvent],
    note_index: usize,
    config: &MeasureConfig,
) -> Result<Part, EditError> {
    if note_index >= notes.len() {
        return Err(EditError::NoteIndexOutOfRange {
            index: note_index,
            len: notes.len(),
        });
    }

    let mut updated = notes.to_vec();
    updated.remove(note_index);
    for filler in filler_rests(config.beats_per_measure / 2) {
        updated.push(filler);
    }

    Ok(part.with_notes_input(serialize_notes(&updated)))
}

/// Decompose a beat gap into filler rests, greedily largest-to-smallest
/// over the duration table, so the gap is covered exactly: half a beat
/// becomes one `8` rest, three quarters of a beat an `8` then a `16`.
fn filler_rests(gap: Rational32) -> Vec<NoteEvent> {
    let mut remaining = gap;
    let mut fillers = Vec::new();
    while remaining > Rational32::from_integer(0) {
        let Some(duration) = Duration::largest_fitting(remaining) else {
            // Gaps are multiples of a sixteenth, so the table always
            // covers them; nothing sensible to insert otherwise.
            break;
        };
        remaining -= duration.beats();
        fillers.push(NoteEvent::filler_rest(duration, 0));
    }
    fillers
}

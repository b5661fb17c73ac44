//! Measure partitioning
//!
//! Slices the flat note sequence into measures of a fixed beat
//! capacity for the drawing backend. The capacity is configuration,
//! never derived from input; the algorithm itself is signature-agnostic.

use num_rational::Rational32;

use crate::models::{Duration, NoteEvent};

/// Beat capacity of one measure. `Default` is common time (4 beats).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureConfig {
    pub beats_per_measure: Rational32,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        MeasureConfig {
            beats_per_measure: Rational32::from_integer(4),
        }
    }
}

impl MeasureConfig {
    pub fn common_time() -> Self {
        Self::default()
    }
}

/// Greedily partition a flat sequence into measures.
///
/// Events accumulate into the current measure until the next event
/// would push the beat sum past capacity; an event that exactly
/// completes a measure closes it. A closed measure is never reopened.
/// Capacity is expected to be at least the largest duration (`w`, which
/// equals the default capacity), so a single event never overflows a
/// fresh measure. With a smaller configured capacity an oversized event
/// still gets a measure of its own, immediately closed.
///
/// An empty sequence yields exactly one measure holding a single
/// full-measure rest, so a measure-based renderer always has at least
/// one measure to draw. Measure numbers are positional, 1-based when
/// displayed.
pub fn split_into_measures(
    notes: &[NoteEvent],
    config: &MeasureConfig,
) -> Vec<Vec<NoteEvent>> {
    if notes.is_empty() {
        return vec![vec![NoteEvent::filler_rest(Duration::Whole, 0)]];
    }

    let capacity = config.beats_per_measure;
    let zero = Rational32::from_integer(0);

    let mut measures = Vec::new();
    let mut current: Vec<NoteEvent> = Vec::new();
    let mut beats = zero;

    for note in notes {
        let note_beats = note.beats();
        if !current.is_empty() && beats + note_beats > capacity {
            measures.push(std::mem::take(&mut current));
            beats = zero;
        }
        beats += note_beats;
        current.push(note.clone());
        if beats >= capacity {
            measures.push(std::mem::take(&mut current));
            beats = zero;
        }
    }
    if !current.is_empty() {
        measures.push(current);
    }

    measures
}

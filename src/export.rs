//! Structured part export
//!
//! The score service persists parts through a nested REST shape:
//! part → measures (1-based `number`) → notes (`pitch` as letter plus
//! octave text, `duration` symbol, `position` within the measure,
//! `rest`). This module reproduces that shape from a part's notation
//! text so the host can hand it to the service unchanged.

use serde::{Deserialize, Serialize};

use crate::layout::{split_into_measures, MeasureConfig};
use crate::models::{NoteEvent, Part};
use crate::parse::{parse_notes_input, NotationError};

/// One note in the persisted shape, e.g. `{ "pitch": "C4",
/// "duration": "q", "position": 0, "rest": false }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteExport {
    pub pitch: String,
    pub duration: crate::models::Duration,
    pub position: usize,
    pub rest: bool,
}

/// One measure in the persisted shape; `number` is 1-based.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeasureExport {
    pub number: usize,
    pub notes: Vec<NoteExport>,
}

/// The persisted nested part shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PartExport {
    pub name: String,
    pub measures: Vec<MeasureExport>,
}

/// Build the nested export shape from a part's notation text.
pub fn export_part(part: &Part, config: &MeasureConfig) -> Result<PartExport, NotationError> {
    let notes = parse_notes_input(&part.notes_input)?;
    let measures = split_into_measures(&notes, config)
        .iter()
        .enumerate()
        .map(|(index, measure)| MeasureExport {
            number: index + 1,
            notes: trim_to_capacity(measure, config)
                .iter()
                .enumerate()
                .map(|(position, note)| NoteExport {
                    pitch: note.pitch_notation(),
                    duration: note.duration,
                    position,
                    rest: note.rest,
                })
                .collect(),
        })
        .collect();

    Ok(PartExport {
        name: part.name.clone(),
        measures,
    })
}

/// Clamp a measure's notes to capacity, stopping at the first note
/// that pushes the running beat sum past it. Locally partitioned
/// measures never overflow, but measures arriving from outside (the
/// service applies the same clamp on import) may.
pub fn trim_to_capacity<'a>(
    notes: &'a [NoteEvent],
    config: &MeasureConfig,
) -> &'a [NoteEvent] {
    let mut beats = num_rational::Rational32::from_integer(0);
    let mut end = 0;
    for note in notes {
        beats += note.beats();
        if beats > config.beats_per_measure {
            break;
        }
        end += 1;
    }
    &notes[..end]
}

//! Note events: the flat in-memory form of a parsed part

use num_rational::Rational32;
use serde::{Deserialize, Serialize};

use super::duration::Duration;
use super::pitch::PitchLetter;

/// Pitch letter used for synthesized filler rests. Rests carry a pitch
/// for layout only; the renderer ignores it.
pub const FILLER_PITCH: PitchLetter = PitchLetter::B;

/// Octave used for synthesized filler rests.
pub const FILLER_OCTAVE: i8 = 4;

/// One pitched or rest event in a part.
///
/// `note_index` is the dense, zero-based position in the flat sequence.
/// It is assigned on parse, recomputed on every parse, and never written
/// back into the notation text; indices from one parse must not be used
/// against the sequence of another.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    pub pitch: PitchLetter,
    pub octave: i8,
    pub duration: Duration,
    #[serde(default)]
    pub rest: bool,
    #[serde(default)]
    pub note_index: usize,
}

impl NoteEvent {
    /// Build a `B4` filler rest, used for shrink backfill, the trailing
    /// rest after deletion, and empty-measure padding.
    pub fn filler_rest(duration: Duration, note_index: usize) -> Self {
        NoteEvent {
            pitch: FILLER_PITCH,
            octave: FILLER_OCTAVE,
            duration,
            rest: true,
            note_index,
        }
    }

    /// Beat value of this event's duration.
    pub fn beats(&self) -> Rational32 {
        self.duration.beats()
    }

    /// Pitch plus octave text, e.g. `C4`.
    pub fn pitch_notation(&self) -> String {
        format!("{}{}", self.pitch, self.octave)
    }

    /// Full notation token for this event, e.g. `C4/q` or `B4/8/r`.
    pub fn notation(&self) -> String {
        if self.rest {
            format!("{}{}/{}/r", self.pitch, self.octave, self.duration)
        } else {
            format!("{}{}/{}", self.pitch, self.octave, self.duration)
        }
    }
}

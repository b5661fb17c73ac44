//! Notation grammar: token validation and the codec's two directions
//!
//! `parse_notes_input` turns the textual encoding into a flat
//! `NoteEvent` sequence; `serialize_notes` is its inverse. Round-trip
//! law: for any accepted text, re-parsing the serialized form yields
//! the same event sequence.

use crate::models::{Duration, NoteEvent, PitchLetter};

use super::errors::NotationError;
use super::tokens::{tokenize, NotationToken};

/// Parse the canonical textual encoding into a flat note sequence.
///
/// Strict policy: any malformed token fails the whole parse with a
/// structured error naming the token and its position. The only
/// optional piece of the grammar is the trailing rest flag. Empty
/// input yields an empty sequence.
pub fn parse_notes_input(input: &str) -> Result<Vec<NoteEvent>, NotationError> {
    let mut notes = Vec::new();
    for token in tokenize(input) {
        let mut note = parse_token(&token)?;
        note.note_index = notes.len();
        notes.push(note);
    }
    Ok(notes)
}

/// Serialize a note sequence back to canonical text, joining tokens
/// with `", "`. `note_index` is not persisted.
pub fn serialize_notes(notes: &[NoteEvent]) -> String {
    notes
        .iter()
        .map(NoteEvent::notation)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate one token against the grammar: `pitchOctave/duration[/r]`.
fn parse_token(token: &NotationToken) -> Result<NoteEvent, NotationError> {
    let fields = token.fields();
    if fields.len() < 2 {
        return Err(NotationError::MissingFields {
            token: token.text.clone(),
            position: token.position,
        });
    }
    if fields.len() > 3 {
        return Err(NotationError::TooManyFields {
            token: token.text.clone(),
            position: token.position,
        });
    }

    let (pitch, octave) = parse_pitch_octave(fields[0], token)?;

    let duration = Duration::from_symbol(fields[1]).ok_or_else(|| {
        NotationError::UnknownDuration {
            token: token.text.clone(),
            position: token.position,
            symbol: fields[1].to_string(),
        }
    })?;

    let rest = match fields.get(2) {
        None => false,
        Some(&"r") => true,
        Some(other) => {
            return Err(NotationError::InvalidRestFlag {
                token: token.text.clone(),
                position: token.position,
                flag: other.to_string(),
            })
        }
    };

    Ok(NoteEvent {
        pitch,
        octave,
        duration,
        rest,
        // Assigned by the caller from the emitted position.
        note_index: 0,
    })
}

/// Split a `pitchOctave` field like `C4` into letter and integer octave.
fn parse_pitch_octave(
    field: &str,
    token: &NotationToken,
) -> Result<(PitchLetter, i8), NotationError> {
    let mut chars = field.chars();
    let letter = chars.next().ok_or_else(|| NotationError::InvalidPitch {
        token: token.text.clone(),
        position: token.position,
        letter: ' ',
    })?;
    let pitch = PitchLetter::from_char(letter).ok_or_else(|| NotationError::InvalidPitch {
        token: token.text.clone(),
        position: token.position,
        letter,
    })?;

    let octave_text = chars.as_str();
    let octave = octave_text
        .parse::<i8>()
        .map_err(|_| NotationError::InvalidOctave {
            token: token.text.clone(),
            position: token.position,
            octave: octave_text.to_string(),
        })?;

    Ok((pitch, octave))
}

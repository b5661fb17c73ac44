//! Error types for notation parsing
//!
//! Every failure names the offending token and its position in the
//! input, so the host can point the user at the exact bad token.

use thiserror::Error;

/// Parse failure for one notation token.
///
/// `position` is the zero-based ordinal of the token among the
/// non-empty tokens of the input (the same numbering `note_index`
/// would use).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotationError {
    /// Token has fewer than the two mandatory fields (pitch-octave and
    /// duration).
    #[error("token '{token}' at position {position}: expected at least pitch and duration fields")]
    MissingFields { token: String, position: usize },

    /// Token has more than the three admitted fields.
    #[error("token '{token}' at position {position}: too many fields")]
    TooManyFields { token: String, position: usize },

    /// Pitch field does not start with a letter `A`–`G`.
    #[error("token '{token}' at position {position}: unknown pitch letter '{letter}'")]
    InvalidPitch {
        token: String,
        position: usize,
        letter: char,
    },

    /// Pitch field has no parseable integer octave after the letter.
    #[error("token '{token}' at position {position}: invalid octave '{octave}'")]
    InvalidOctave {
        token: String,
        position: usize,
        octave: String,
    },

    /// Duration field is not in the duration table.
    #[error("token '{token}' at position {position}: unknown duration symbol '{symbol}'")]
    UnknownDuration {
        token: String,
        position: usize,
        symbol: String,
    },

    /// Third field present but not the literal `r`.
    #[error("token '{token}' at position {position}: expected rest flag 'r', found '{flag}'")]
    InvalidRestFlag {
        token: String,
        position: usize,
        flag: String,
    },
}

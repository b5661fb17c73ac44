//! Pitch letter representation
//!
//! The part grammar only admits the seven western pitch letters;
//! the octave is carried separately on each note event.

use serde::{Deserialize, Serialize};

/// Base pitch letter (western letter names, uppercase)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PitchLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl PitchLetter {
    /// Parse an uppercase pitch letter. Lowercase and anything outside
    /// `A`–`G` is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(PitchLetter::A),
            'B' => Some(PitchLetter::B),
            'C' => Some(PitchLetter::C),
            'D' => Some(PitchLetter::D),
            'E' => Some(PitchLetter::E),
            'F' => Some(PitchLetter::F),
            'G' => Some(PitchLetter::G),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            PitchLetter::A => 'A',
            PitchLetter::B => 'B',
            PitchLetter::C => 'C',
            PitchLetter::D => 'D',
            PitchLetter::E => 'E',
            PitchLetter::F => 'F',
            PitchLetter::G => 'G',
        }
    }
}

impl std::fmt::Display for PitchLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//! Core data model for the part notation engine

pub mod duration;
pub mod note;
pub mod part;
pub mod pitch;

// Re-export commonly used types
pub use duration::{beats_of, beats_remaining, Duration};
pub use note::{NoteEvent, FILLER_OCTAVE, FILLER_PITCH};
pub use part::Part;
pub use pitch::PitchLetter;

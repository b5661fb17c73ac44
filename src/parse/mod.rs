//! Notation codec for the part grammar
//!
//! Text in, `NoteEvent` sequence out, and back again. The tokenizer
//! and grammar are split so parse errors carry token positions.

pub mod errors;
pub mod grammar;
pub mod tokens;

// Re-export commonly used items
pub use errors::NotationError;
pub use grammar::{parse_notes_input, serialize_notes};
pub use tokens::{tokenize, NotationToken};

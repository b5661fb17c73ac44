//! Part values: the persisted unit of notation
//!
//! A part is exchanged with the host as `{ name, notesInput }` where
//! `notesInput` is the canonical textual encoding. Parts are immutable
//! values: every edit produces a new `Part`, the engine never mutates
//! one in place.

use serde::{Deserialize, Serialize};

/// A named part holding its notation text.
///
/// Field declaration order is the canonical JSON field order
/// (`{name, notesInput}`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Part {
    pub name: String,
    #[serde(rename = "notesInput")]
    pub notes_input: String,
}

impl Part {
    pub fn new(name: impl Into<String>, notes_input: impl Into<String>) -> Self {
        Part {
            name: name.into(),
            notes_input: notes_input.into(),
        }
    }

    /// New part value with the same name and replaced notation text.
    pub fn with_notes_input(&self, notes_input: String) -> Self {
        Part {
            name: self.name.clone(),
            notes_input,
        }
    }

    /// Canonical JSON serialization.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

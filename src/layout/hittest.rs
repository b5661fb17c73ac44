//! Hit-testing rendered glyphs back to logical note indices
//!
//! The drawing backend reports one bounding box per glyph it actually
//! drew, in the rendering surface's coordinate space. The boxes are a
//! one-shot handoff: every render pass replaces the whole list, and a
//! list from a previous pass must never be consulted again.

use serde::{Deserialize, Serialize};

/// Bounding box of one drawn glyph, tagged with the logical index of
/// the note it renders. Recomputed on every render pass, never
/// persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNoteInfo {
    pub note_index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RenderedNoteInfo {
    /// Point containment, inclusive on the left/top edge and exclusive
    /// on the right/bottom edge.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Resolve a pointer coordinate to the first matching note index.
///
/// An empty list (render not yet complete) always yields `None`, which
/// callers treat as a no-op. Rests resolve exactly like pitched notes;
/// the distinction only matters to whoever stages the edit.
pub fn locate_note_at(x: f32, y: f32, rendered: &[RenderedNoteInfo]) -> Option<usize> {
    rendered
        .iter()
        .find(|info| info.contains(x, y))
        .map(|info| info.note_index)
}

//! Layout concerns shared with the drawing backend
//!
//! The core hands the backend per-measure note groups plus the fixed
//! staff constants below; the backend hands back the bounding boxes of
//! the glyphs it drew.

pub mod hittest;
pub mod measures;

// Re-export commonly used items
pub use hittest::{locate_note_at, RenderedNoteInfo};
pub use measures::{split_into_measures, MeasureConfig};

use serde::{Deserialize, Serialize};

/// Fixed staff constants supplied to the drawing backend with every
/// render pass.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub clef: String,
    pub time_signature: String,
    pub beats_per_measure: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            clef: "treble".to_string(),
            time_signature: "4/4".to_string(),
            beats_per_measure: 4,
        }
    }
}

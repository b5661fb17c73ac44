//! WASM API boundary
//!
//! - `helpers`: shared serialization, validation, and logging shims
//! - `core`: the JavaScript-facing engine operations

pub mod core;
pub mod helpers;

// Re-export the public API surface
pub use self::core::{
    delete_selected_note, export_part_json, get_part_json, get_render_config, locate_note_at,
    parse_notes_input, serialize_notes, split_into_measures, update_selected_note,
};

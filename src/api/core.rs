//! JavaScript-facing API for the part notation engine
//!
//! Thin boundary over the pure core: every function deserializes its
//! JS arguments, calls the corresponding core operation, and hands the
//! result (or a structured error message) back to JS. No state lives
//! on this side of the boundary.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::edit::PendingEdit;
use crate::layout::{MeasureConfig, RenderConfig, RenderedNoteInfo};
use crate::models::{NoteEvent, Part};
use crate::{wasm_error, wasm_info, wasm_log};

/// Parse the textual encoding into an array of note events.
///
/// Errors carry the offending token and its position.
#[wasm_bindgen(js_name = parseNotesInput)]
pub fn parse_notes_input(text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("parseNotesInput called: {} chars", text.len());

    let notes = crate::parse::parse_notes_input(text).map_err(|e| {
        wasm_error!("parseNotesInput failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&notes, "Failed to serialize note events")
}

/// Serialize an array of note events back to canonical notation text.
#[wasm_bindgen(js_name = serializeNotes)]
pub fn serialize_notes(notes: JsValue) -> Result<String, JsValue> {
    let notes: Vec<NoteEvent> = deserialize(notes, "Invalid note events")?;
    Ok(crate::parse::serialize_notes(&notes))
}

/// Partition an array of note events into measures of the configured
/// beat capacity. An empty array yields one whole-rest measure.
#[wasm_bindgen(js_name = splitIntoMeasures)]
pub fn split_into_measures(notes: JsValue) -> Result<JsValue, JsValue> {
    let notes: Vec<NoteEvent> = deserialize(notes, "Invalid note events")?;
    let measures = crate::layout::split_into_measures(&notes, &MeasureConfig::default());
    serialize(&measures, "Failed to serialize measures")
}

/// Apply a staged single-note edit and return the new part value.
#[wasm_bindgen(js_name = updateSelectedNote)]
pub fn update_selected_note(
    part: JsValue,
    notes: JsValue,
    selection: JsValue,
) -> Result<JsValue, JsValue> {
    let part: Part = deserialize(part, "Invalid part")?;
    let notes: Vec<NoteEvent> = deserialize(notes, "Invalid note events")?;
    let edit: PendingEdit = deserialize(selection, "Invalid selection")?;
    wasm_info!(
        "updateSelectedNote called: note {} of part '{}'",
        edit.note_index,
        part.name
    );

    let updated = crate::edit::update_selected_note(&part, &notes, &edit).map_err(|e| {
        wasm_error!("updateSelectedNote failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&updated, "Failed to serialize part")
}

/// Delete the note at `note_index` and return the new part value.
#[wasm_bindgen(js_name = deleteSelectedNote)]
pub fn delete_selected_note(
    part: JsValue,
    notes: JsValue,
    note_index: usize,
) -> Result<JsValue, JsValue> {
    let part: Part = deserialize(part, "Invalid part")?;
    let notes: Vec<NoteEvent> = deserialize(notes, "Invalid note events")?;
    wasm_info!(
        "deleteSelectedNote called: note {} of part '{}'",
        note_index,
        part.name
    );

    let updated =
        crate::edit::delete_selected_note(&part, &notes, note_index, &MeasureConfig::default())
            .map_err(|e| {
                wasm_error!("deleteSelectedNote failed: {}", e);
                JsValue::from_str(&e.to_string())
            })?;

    serialize(&updated, "Failed to serialize part")
}

/// Resolve a pointer coordinate (relative to the rendering surface's
/// origin) to a note index, or `undefined` when no glyph box matches.
#[wasm_bindgen(js_name = locateNoteAt)]
pub fn locate_note_at(x: f32, y: f32, rendered: JsValue) -> Result<Option<usize>, JsValue> {
    let rendered: Vec<RenderedNoteInfo> = deserialize(rendered, "Invalid rendered note info")?;
    Ok(crate::layout::locate_note_at(x, y, &rendered))
}

/// Canonical JSON for a part value, field order `{name, notesInput}`.
#[wasm_bindgen(js_name = getPartJson)]
pub fn get_part_json(part: JsValue) -> Result<String, JsValue> {
    let part: Part = deserialize(part, "Invalid part")?;
    part.to_json().map_err(|e| {
        wasm_error!("getPartJson failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

/// Nested score-service JSON for a part (measures with numbered,
/// positioned notes).
#[wasm_bindgen(js_name = exportPartJson)]
pub fn export_part_json(part: JsValue) -> Result<String, JsValue> {
    let part: Part = deserialize(part, "Invalid part")?;
    let export = crate::export::export_part(&part, &MeasureConfig::default()).map_err(|e| {
        wasm_error!("exportPartJson failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    serde_json::to_string(&export).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fixed staff constants for the drawing backend.
#[wasm_bindgen(js_name = getRenderConfig)]
pub fn get_render_config() -> Result<JsValue, JsValue> {
    serialize(&RenderConfig::default(), "Failed to serialize render config")
}

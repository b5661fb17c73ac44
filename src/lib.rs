//! Music Part Notation Engine WASM Module
//!
//! Bidirectional mapping between a compact textual part encoding, a
//! structured note sequence, a measure-partitioned layout, and the
//! hit-testable glyph positions the drawing backend reports. The
//! drawing itself lives on the JS side; this module owns parse, edit,
//! rest-autofill, measure split, hit-test, and serialization.

pub mod api;
pub mod edit;
pub mod export;
pub mod layout;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use models::duration::{beats_of, beats_remaining, Duration};
pub use models::note::NoteEvent;
pub use models::part::Part;
pub use models::pitch::PitchLetter;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Part notation engine WASM module initialized");
}

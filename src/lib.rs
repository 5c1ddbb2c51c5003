//! Embed Generator WASM Module
//!
//! Turns flashcards, fill-in-the-blank lyrics and vocabulary word lists into
//! self-contained HTML/CSS/JS snippets that can be pasted into any page.

pub mod api;
pub mod colors;
pub mod error;
pub mod escape;
pub mod generator;
pub mod lookup;
pub mod models;
pub mod parse;
pub mod runtime;
pub mod templates;

// Re-export commonly used types
pub use error::GeneratorError;
pub use generator::{Capabilities, EmbedDocument, EmbedRequest, EmbedSize, GenerationWarning, Generator};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("logger already initialized");
    }

    log::info!("Embed generator WASM module initialized");
}

//! Embed generation for the WASM API

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::api::helpers::{deserialize, serialize};
use crate::generator::{EmbedDocument, EmbedRequest, EmbedSize, Generator};
use crate::models::{FlashcardStyle, LyricsStyle, WordListStyle};
use crate::parse::download_file_name;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedEmbed<'a> {
    #[serde(flatten)]
    document: &'a EmbedDocument,
    size: EmbedSize,
}

/// Generate an embed document
///
/// # Parameters
/// * `request` - `{ kind: "flashcards" | "lyrics" | "wordList", ... }`
///
/// # Returns
/// `{ html, containerId, capabilities, warnings, size: { bytes, kb } }`
#[wasm_bindgen(js_name = generateEmbed)]
pub fn generate_embed(request: JsValue) -> Result<JsValue, JsValue> {
    let request: EmbedRequest = deserialize(request, "Invalid embed request")?;
    wasm_log!("generateEmbed called");

    let document = Generator::new().generate(&request).map_err(|e| {
        wasm_error!("Embed generation failed: {}", e);
        JsValue::from_str(&format!("Embed generation failed: {}", e))
    })?;

    for warning in &document.warnings {
        wasm_warn!("{:?}", warning);
    }
    let size = document.size();
    wasm_info!("  {} generated: {} KB", document.container_id, size.kb);

    serialize(&GeneratedEmbed { document: &document, size }, "Failed to serialize embed")
}

/// Size of an already generated document
#[wasm_bindgen(js_name = embedSize)]
pub fn embed_size(html: &str) -> Result<JsValue, JsValue> {
    serialize(&EmbedSize::of(html.len()), "Failed to serialize size")
}

/// File name for downloading generated code as text
#[wasm_bindgen(js_name = downloadFileName)]
pub fn download_file_name_js(title: &str) -> String {
    download_file_name(title)
}

/// Editor defaults for every style: `{ flashcards, lyrics, wordList }`
#[wasm_bindgen(js_name = defaultStyles)]
pub fn default_styles() -> Result<JsValue, JsValue> {
    serialize(
        &serde_json::json!({
            "flashcards": FlashcardStyle::default(),
            "lyrics": LyricsStyle::default(),
            "wordList": WordListStyle::default(),
        }),
        "Failed to serialize default styles",
    )
}

//! Flashcard editor operations for the WASM API

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, serialize};
use crate::lookup::apply_bulk_texts as apply_texts;
use crate::models::{resize_cards as resize, CardCount, CardItem};
use crate::parse::{extract_file_id as file_id, normalize_drive_link as normalize, parse_filename as split_filename};
use crate::{wasm_error, wasm_info};

/// Rewrite a Drive share link to its thumbnail form
#[wasm_bindgen(js_name = normalizeDriveLink)]
pub fn normalize_drive_link(url: &str) -> String {
    normalize(url.trim())
}

/// Drive file id of a share link, if it is one
#[wasm_bindgen(js_name = extractFileId)]
pub fn extract_file_id(url: &str) -> Option<String> {
    file_id(url).map(str::to_string)
}

/// Split `"Name - CODE - description"` into `{ name, lessonCode }`
#[wasm_bindgen(js_name = parseFilename)]
pub fn parse_filename(filename: &str) -> Result<JsValue, JsValue> {
    serialize(&split_filename(filename), "Failed to serialize filename")
}

/// Resize the card list to 8, 16 or 24
#[wasm_bindgen(js_name = resizeCards)]
pub fn resize_cards(cards: JsValue, count: usize) -> Result<JsValue, JsValue> {
    let cards: Vec<CardItem> = deserialize(cards, "Invalid cards")?;
    let count = CardCount::from_count(count).ok_or_else(|| {
        wasm_error!("Unsupported card count {}", count);
        JsValue::from_str(&format!("Unsupported card count {} (expected 8, 16 or 24)", count))
    })?;
    serialize(&resize(&cards, count), "Failed to serialize cards")
}

/// Apply one caption per pasted line
///
/// # Returns
/// `{ cards, applied }`
#[wasm_bindgen(js_name = applyBulkTexts)]
pub fn apply_bulk_texts(cards: JsValue, text: &str) -> Result<JsValue, JsValue> {
    let mut cards: Vec<CardItem> = deserialize(cards, "Invalid cards")?;
    let applied = apply_texts(&mut cards, text);
    wasm_info!("{} texts applied", applied);
    serialize(
        &serde_json::json!({ "cards": cards, "applied": applied }),
        "Failed to serialize cards",
    )
}

/// Apply one image link per pasted line and fill captions from filenames
///
/// # Parameters
/// * `endpoint` - lookup endpoint URL, `/api/extract-filename` when omitted
///
/// # Returns
/// Promise of `{ cards, report: { applied, resolved, failed } }`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = applyBulkLinks)]
pub async fn apply_bulk_links(cards: JsValue, text: String, endpoint: Option<String>) -> Result<JsValue, JsValue> {
    use crate::lookup::endpoint::EndpointFilenameSource;

    let mut cards: Vec<CardItem> = deserialize(cards, "Invalid cards")?;
    let source = endpoint
        .map(EndpointFilenameSource::new)
        .unwrap_or_default();
    let report = crate::lookup::apply_bulk_links(&mut cards, &text, &source).await;
    wasm_info!(
        "{} links applied, {} filenames fetched, {} failed",
        report.applied,
        report.resolved,
        report.failed
    );
    serialize(
        &serde_json::json!({ "cards": cards, "report": report }),
        "Failed to serialize cards",
    )
}

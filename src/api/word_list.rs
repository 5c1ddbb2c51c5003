//! Word-list editor operations and color presets for the WASM API

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, serialize};
use crate::colors::{find_preset, PRESETS};
use crate::models::{default_themes as themes, FlashcardStyle, Theme, WordListStyle};
use crate::parse::parse_word_list as split_words;
use crate::{wasm_error, wasm_info};

/// Split a comma-separated word field
#[wasm_bindgen(js_name = parseWordList)]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    serialize(&split_words(text), "Failed to serialize words")
}

/// The two themes the word-list editor starts with
#[wasm_bindgen(js_name = defaultThemes)]
pub fn default_themes() -> Result<JsValue, JsValue> {
    serialize(&themes(), "Failed to serialize themes")
}

/// Append a placeholder lesson to a theme
#[wasm_bindgen(js_name = addLesson)]
pub fn add_lesson(theme: JsValue) -> Result<JsValue, JsValue> {
    let mut theme: Theme = deserialize(theme, "Invalid theme")?;
    let name = theme.add_lesson().name.clone();
    wasm_info!("Added '{}' to '{}'", name, theme.title);
    serialize(&theme, "Failed to serialize theme")
}

/// Remove a lesson from a theme; the last lesson cannot be removed
#[wasm_bindgen(js_name = removeLesson)]
pub fn remove_lesson(theme: JsValue, index: usize) -> Result<JsValue, JsValue> {
    let mut theme: Theme = deserialize(theme, "Invalid theme")?;
    theme.remove_lesson(index).map_err(|_| {
        wasm_error!("Cannot remove lesson {} from '{}'", index, theme.title);
        JsValue::from_str("A theme must keep at least one lesson")
    })?;
    serialize(&theme, "Failed to serialize theme")
}

/// Named color palettes: `[{ name, primary, secondary, accent }]`
#[wasm_bindgen(js_name = colorPresets)]
pub fn color_presets() -> Result<JsValue, JsValue> {
    serialize(&PRESETS, "Failed to serialize presets")
}

/// Recolor a word-list style with a named preset
#[wasm_bindgen(js_name = applyWordListPreset)]
pub fn apply_word_list_preset(style: JsValue, preset: &str) -> Result<JsValue, JsValue> {
    let mut style: WordListStyle = deserialize(style, "Invalid word list style")?;
    let preset = find_preset(preset).ok_or_else(|| unknown_preset(preset))?;
    preset.apply_to_word_list(&mut style);
    serialize(&style, "Failed to serialize style")
}

/// Recolor a flashcard style with a named preset
#[wasm_bindgen(js_name = applyFlashcardPreset)]
pub fn apply_flashcard_preset(style: JsValue, preset: &str) -> Result<JsValue, JsValue> {
    let mut style: FlashcardStyle = deserialize(style, "Invalid flashcard style")?;
    let preset = find_preset(preset).ok_or_else(|| unknown_preset(preset))?;
    preset.apply_to_flashcards(&mut style);
    serialize(&style, "Failed to serialize style")
}

fn unknown_preset(name: &str) -> JsValue {
    wasm_error!("Unknown color preset '{}'", name);
    JsValue::from_str(&format!("Unknown color preset '{}'", name))
}

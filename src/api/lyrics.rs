//! Lyrics editor operations and live preview state for the WASM API

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::api::helpers::{deserialize, serialize};
use crate::models::LyricsDocument;
use crate::parse::{parse_paragraphs, paragraphs_to_fragment, player_url};
use crate::runtime::{AudioSwitch, ParagraphController};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Player URL from a pasted SoundCloud embed snippet
///
/// # Returns
/// The compact player URL, or `undefined` when nothing usable was pasted
#[wasm_bindgen(js_name = soundcloudPlayerUrl)]
pub fn soundcloud_player_url(embed_code: &str) -> Option<String> {
    let url = player_url(embed_code);
    if url.is_none() && !embed_code.trim().is_empty() {
        wasm_warn!("No SoundCloud URL found in pasted embed code");
    }
    url
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphPreview {
    html: String,
    paragraphs: usize,
    hideable_words: usize,
}

/// Parse lyrics body text for the editor preview
///
/// # Returns
/// `{ html, paragraphs, hideableWords }` where `html` is the `<p>` fragment
#[wasm_bindgen(js_name = previewLyrics)]
pub fn preview_lyrics(body_text: &str) -> Result<JsValue, JsValue> {
    let paragraphs = parse_paragraphs(body_text);
    let preview = ParagraphPreview {
        html: paragraphs_to_fragment(&paragraphs).into_string(),
        paragraphs: paragraphs.len(),
        hideable_words: paragraphs.iter().map(|p| p.hideable_words).sum(),
    };
    serialize(&preview, "Failed to serialize lyrics preview")
}

/// Paragraph and audio state of the editor's live lyrics preview
///
/// Transitions match the embedded widget's runtime exactly.
#[wasm_bindgen]
pub struct LyricsPreview {
    paragraphs: Option<ParagraphController>,
    audio: Option<AudioSwitch>,
}

#[wasm_bindgen]
impl LyricsPreview {
    /// Build preview state for a lyrics document
    ///
    /// # Parameters
    /// * `document` - `{ title, author, vocalAudioUrl, instrumentalAudioUrl?, bodyText }`
    #[wasm_bindgen(constructor)]
    pub fn new(document: JsValue) -> Result<LyricsPreview, JsValue> {
        let document: LyricsDocument = deserialize(document, "Invalid lyrics document")?;
        let count = parse_paragraphs(&document.body_text).len();
        wasm_info!("LyricsPreview created: {} paragraphs", count);
        Ok(LyricsPreview {
            paragraphs: ParagraphController::new(count),
            audio: AudioSwitch::for_document(&document),
        })
    }

    /// Whether paragraph controls are shown at all
    #[wasm_bindgen(getter, js_name = hasParagraphs)]
    pub fn has_paragraphs(&self) -> bool {
        self.paragraphs.is_some()
    }

    #[wasm_bindgen(getter, js_name = dualAudio)]
    pub fn dual_audio(&self) -> bool {
        self.audio.is_some()
    }

    pub fn next(&mut self) -> Result<JsValue, JsValue> {
        self.apply(ParagraphController::next)
    }

    pub fn previous(&mut self) -> Result<JsValue, JsValue> {
        self.apply(ParagraphController::previous)
    }

    pub fn select(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.apply(|c| c.select(index))
    }

    #[wasm_bindgen(js_name = toggleCurrent)]
    pub fn toggle_current(&mut self) -> Result<JsValue, JsValue> {
        self.apply(ParagraphController::toggle_current)
    }

    pub fn hide(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.apply(|c| c.hide(index))
    }

    pub fn show(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.apply(|c| c.show(index))
    }

    #[wasm_bindgen(js_name = hideAll)]
    pub fn hide_all(&mut self) -> Result<JsValue, JsValue> {
        self.apply(|c| {
            c.hide_all();
        })
    }

    #[wasm_bindgen(js_name = showAll)]
    pub fn show_all(&mut self) -> Result<JsValue, JsValue> {
        self.apply(|c| {
            c.show_all();
        })
    }

    /// Current paragraph view: `{ indicator, current, currentHidden, hidden }`
    pub fn view(&self) -> Result<JsValue, JsValue> {
        match &self.paragraphs {
            Some(controller) => serialize(&controller.view(), "Failed to serialize view"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Start a track switch; `false` when no switch is possible right now
    #[wasm_bindgen(js_name = requestSwitch)]
    pub fn request_switch(&mut self) -> bool {
        self.audio.as_mut().is_some_and(AudioSwitch::request_switch)
    }

    /// Complete a track switch with the active track's position and state
    ///
    /// # Returns
    /// `{ pause, seek, positionMs, play }`, or `null` if no switch is pending
    #[wasm_bindgen(js_name = positionReported)]
    pub fn position_reported(&mut self, position_ms: f64, was_playing: bool) -> Result<JsValue, JsValue> {
        let position_ms = position_ms.max(0.0) as u64;
        match self.audio.as_mut().and_then(|a| a.position_reported(position_ms, was_playing)) {
            Some(plan) => {
                wasm_log!("switching audio to {:?} at {} ms", plan.seek, plan.position_ms);
                serialize(&plan, "Failed to serialize switch plan")
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Track currently audible: `"vocal"`, `"instrumental"` or `undefined`
    #[wasm_bindgen(getter, js_name = activeTrack)]
    pub fn active_track(&self) -> Option<String> {
        self.audio.as_ref().map(|a| {
            match a.active() {
                crate::runtime::Track::Vocal => "vocal",
                crate::runtime::Track::Instrumental => "instrumental",
            }
            .to_string()
        })
    }
}

impl LyricsPreview {
    fn apply(&mut self, transition: impl FnOnce(&mut ParagraphController)) -> Result<JsValue, JsValue> {
        if let Some(controller) = self.paragraphs.as_mut() {
            transition(controller);
        }
        self.view()
    }
}

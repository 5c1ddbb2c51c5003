//! Embed document generation
//!
//! One [`Generator`] handles all three embed kinds. What used to be separate
//! single-page, multi-page and dual-audio variants is expressed as a
//! [`Capabilities`] set derived from the content, and the templates switch
//! sections on and off from it.
//!
//! Output is a pure function of the request apart from the container id,
//! which is random per document unless fixed with
//! [`Generator::with_container_id`].
//!
//! Document layout, in order:
//! 1. `<style data-lw-embed="{id}">` with the instance's styles
//! 2. a `<script>` registering the instance data under `window.lwEmbedData[id]`
//! 3. the widget markup
//! 4. a `<script>` with the runtime, invoked for this instance

pub mod decorations;
mod flashcards;
mod lyrics;
pub mod pagination;
pub mod print;
mod word_list;

use crate::error::GeneratorError;
use crate::models::{CardItem, FlashcardStyle, LyricsDocument, LyricsStyle, Theme, WordListStyle, PAGE_SIZE};
use crate::parse::download_file_name;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use pagination::{back_slots, page_count, paginate};

/// Content and style for one embed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EmbedRequest {
    Flashcards {
        cards: Vec<CardItem>,
        style: FlashcardStyle,
    },
    Lyrics {
        document: LyricsDocument,
        style: LyricsStyle,
    },
    WordList {
        themes: Vec<Theme>,
        style: WordListStyle,
    },
}

impl EmbedRequest {
    fn id_prefix(&self) -> &'static str {
        match self {
            EmbedRequest::Flashcards { .. } => "lw-fc",
            EmbedRequest::Lyrics { .. } => "lw-gt",
            EmbedRequest::WordList { .. } => "lw-wl",
        }
    }
}

/// Optional behavior a document carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Flashcards span more than one page: navigation bar, dots, wheel paging
    pub multi_page: bool,
    /// Lyrics carry a vocal and an instrumental track with a switch
    pub dual_audio: bool,
}

impl Capabilities {
    pub fn detect(request: &EmbedRequest) -> Self {
        match request {
            EmbedRequest::Flashcards { cards, .. } => Self {
                multi_page: page_count(cards.len()) > 1,
                dual_audio: false,
            },
            EmbedRequest::Lyrics { document, .. } => Self {
                multi_page: false,
                dual_audio: !document.vocal_audio_url.trim().is_empty()
                    && document.instrumental().is_some(),
            },
            EmbedRequest::WordList { .. } => Self::default(),
        }
    }
}

/// Non-fatal observations about the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationWarning {
    /// The card count is not a multiple of the page size; the last page is
    /// rendered short rather than truncated
    #[serde(rename_all = "camelCase")]
    PartialLastPage { card_count: usize, last_page_len: usize },
}

fn warnings_for(request: &EmbedRequest) -> Vec<GenerationWarning> {
    let mut warnings = Vec::new();
    if let EmbedRequest::Flashcards { cards, .. } = request {
        let remainder = cards.len() % PAGE_SIZE;
        if remainder != 0 {
            log::warn!(
                "{} cards is not a multiple of {}; last page has {}",
                cards.len(),
                PAGE_SIZE,
                remainder
            );
            warnings.push(GenerationWarning::PartialLastPage {
                card_count: cards.len(),
                last_page_len: remainder,
            });
        }
    }
    warnings
}

/// Size of a generated document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmbedSize {
    pub bytes: usize,
    /// Kilobytes rounded to two decimals
    pub kb: f64,
}

impl EmbedSize {
    pub fn of(bytes: usize) -> Self {
        Self {
            bytes,
            kb: (bytes as f64 / 1024.0 * 100.0).round() / 100.0,
        }
    }
}

/// A generated, self-contained embed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedDocument {
    pub html: String,
    pub container_id: String,
    pub capabilities: Capabilities,
    pub warnings: Vec<GenerationWarning>,
}

impl EmbedDocument {
    pub fn size(&self) -> EmbedSize {
        EmbedSize::of(self.html.len())
    }

    /// The document with its container id replaced by a fixed token
    ///
    /// Two documents generated from the same request are equal after this.
    pub fn normalized(&self) -> String {
        if self.container_id.is_empty() {
            return self.html.clone();
        }
        self.html.replace(&self.container_id, "{container-id}")
    }

    /// Write the document as a `.txt` file named after `title`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, dir: &std::path::Path, title: &str) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(download_file_name(title));
        std::fs::write(&path, &self.html)?;
        log::info!("saved embed ({} bytes) to {}", self.html.len(), path.display());
        Ok(path)
    }

    pub fn download_file_name(&self, title: &str) -> String {
        download_file_name(title)
    }
}

/// Builds embed documents
#[derive(Debug, Clone, Default)]
pub struct Generator {
    container_id: Option<String>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed container id instead of a random one
    ///
    /// A blank id falls back to a random one.
    pub fn with_container_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            container_id: Some(id).filter(|id| !id.trim().is_empty()),
        }
    }

    fn container_id(&self, request: &EmbedRequest) -> String {
        match &self.container_id {
            Some(id) => id.clone(),
            None => {
                let token = Uuid::new_v4().simple().to_string();
                format!("{}-{}", request.id_prefix(), &token[..12])
            }
        }
    }

    pub fn generate(&self, request: &EmbedRequest) -> Result<EmbedDocument, GeneratorError> {
        let capabilities = Capabilities::detect(request);
        let container_id = self.container_id(request);
        let warnings = warnings_for(request);

        let html = match request {
            EmbedRequest::Flashcards { cards, style } => {
                flashcards::render(cards, style, &container_id, capabilities)?
            }
            EmbedRequest::Lyrics { document, style } => {
                lyrics::render(document, style, &container_id, capabilities)?
            }
            EmbedRequest::WordList { themes, style } => {
                word_list::render(themes, style, &container_id)?
            }
        };

        log::info!(
            "generated {} ({} bytes, {:?})",
            container_id,
            html.len(),
            capabilities
        );

        Ok(EmbedDocument {
            html,
            container_id,
            capabilities,
            warnings,
        })
    }
}

//! Embed templates and runtime assets
//!
//! Markup lives in Mustache templates (`*.html.mustache`) rendered against a
//! serializable context. Every context field is one of the escaped string
//! types from [`crate::escape`] (or a crate-owned static asset) and the
//! templates only use triple braces, so escaping is decided once, by type,
//! when the context is built.
//!
//! The runtime scripts and stylesheets are plain files embedded with
//! `include_str!` and inserted verbatim. They define their factory function
//! once per host page and are then invoked per widget instance.

use crate::error::GeneratorError;
use serde::Serialize;

/// Template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedTemplate {
    /// Flashcard grid, optional page navigation, print buttons
    Flashcards,
    /// Duplex print sheet for one flashcard page (opened in a popup)
    PrintSheet,
    /// Fill-in-the-blank lyrics page
    Lyrics,
    /// Vocabulary word-list cards and modal
    WordList,
}

impl EmbedTemplate {
    pub fn name(self) -> &'static str {
        match self {
            EmbedTemplate::Flashcards => "flashcards",
            EmbedTemplate::PrintSheet => "print_sheet",
            EmbedTemplate::Lyrics => "lyrics",
            EmbedTemplate::WordList => "word_list",
        }
    }

    fn source(self) -> &'static str {
        match self {
            EmbedTemplate::Flashcards => include_str!("flashcards.html.mustache"),
            EmbedTemplate::PrintSheet => include_str!("print_sheet.html.mustache"),
            EmbedTemplate::Lyrics => include_str!("lyrics.html.mustache"),
            EmbedTemplate::WordList => include_str!("word_list.html.mustache"),
        }
    }
}

/// Flashcard page navigation, caption toggling and duplex printing
pub const FLASHCARDS_RUNTIME: &str = include_str!("flashcards.js");
/// Paragraph/word state machine, lyrics printing and the dual-track switch
pub const LYRICS_RUNTIME: &str = include_str!("lyrics.js");
/// Word-list grid, modal and clipboard copy
pub const WORD_LIST_RUNTIME: &str = include_str!("word_list.js");
/// Lyrics page rules; colors and sizes come from custom properties
pub const LYRICS_STYLES: &str = include_str!("lyrics.css");

/// Render `template` against `context`
pub fn render<C: Serialize>(template: EmbedTemplate, context: &C) -> Result<String, GeneratorError> {
    let compiled = mustache::compile_str(template.source()).map_err(|e| {
        GeneratorError::TemplateCompile {
            name: template.name(),
            message: e.to_string(),
        }
    })?;
    compiled
        .render_to_string(context)
        .map_err(|e| GeneratorError::TemplateRender {
            name: template.name(),
            message: e.to_string(),
        })
}

//! Embed Generator WASM API
//!
//! JavaScript-facing functions for the course-authoring editor.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde-wasm-bindgen conversions
//! - `generate`: embed generation, size and download helpers, style defaults
//! - `cards`: flashcard editing (Drive links, filenames, bulk paste, resizing)
//! - `lyrics`: SoundCloud URLs, paragraph preview, live preview state
//! - `word_list`: word lists, lessons and color presets

pub mod helpers;
pub mod cards;
pub mod generate;
pub mod lyrics;
pub mod word_list;

pub use cards::{apply_bulk_texts, extract_file_id, normalize_drive_link, parse_filename, resize_cards};
#[cfg(target_arch = "wasm32")]
pub use cards::apply_bulk_links;
pub use generate::{default_styles, download_file_name_js, embed_size, generate_embed};
pub use lyrics::{preview_lyrics, soundcloud_player_url, LyricsPreview};
pub use word_list::{
    add_lesson, apply_flashcard_preset, apply_word_list_preset, color_presets, default_themes, parse_word_list,
    remove_lesson,
};

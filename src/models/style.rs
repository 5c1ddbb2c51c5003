//! Visual parameters for each embed kind
//!
//! Colors are CSS strings (usually hex), sizes are plain numbers whose unit
//! is fixed by the field. The `Default` impls are the editor's starting
//! values; the generator itself never fills in a missing parameter.

use serde::{Deserialize, Serialize};

/// Flashcard grid colors and UI text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardStyle {
    pub border_color: String,
    pub text_color: String,
    pub labels: FlashcardLabels,
}

impl Default for FlashcardStyle {
    fn default() -> Self {
        Self {
            border_color: "#FF6B9D".to_string(),
            text_color: "#FFFFFF".to_string(),
            labels: FlashcardLabels::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardLabels {
    pub previous: String,
    pub next: String,
    /// "{page}" and "{total}" are replaced at runtime
    pub page_indicator: String,
    pub print: String,
    /// Appended to `print` on multi-page sets; "{page}" is replaced
    pub print_page: String,
    pub print_duplex: String,
    pub hint: String,
    pub navigate_hint: String,
    pub popup_blocked: String,
}

impl Default for FlashcardLabels {
    fn default() -> Self {
        Self {
            previous: "← Previous".to_string(),
            next: "Next →".to_string(),
            page_indicator: "Page {page} of {total}".to_string(),
            print: "🖨️ Print".to_string(),
            print_page: " Page {page}".to_string(),
            print_duplex: " (Double-sided)".to_string(),
            hint: "💡 Click on a card to hide/show the text".to_string(),
            navigate_hint: " • Swipe or use arrows to navigate".to_string(),
            popup_blocked: "Popup blocker may be active. Please allow popups.".to_string(),
        }
    }
}

/// Decorative SVG drawn in a page corner
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CornerPattern {
    Flower,
    Leaf,
    Circle,
    Cloud,
    Star,
    Heart,
    Music,
    Wave,
    Sparkle,
    None,
}

/// Lyrics page look, emitted as CSS custom properties plus decorations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LyricsStyle {
    pub page_bg_color: String,
    pub panel_bg_color: String,
    pub use_glass: bool,
    pub text_color: String,
    pub font_family: String,
    /// rem
    pub font_size: f32,
    pub word_color: String,
    pub placeholder_color: String,
    pub title_color: String,
    /// rem
    pub title_size: f32,
    pub author_color: String,
    /// rem
    pub author_size: f32,

    pub top_left_pattern: CornerPattern,
    pub bottom_right_pattern: CornerPattern,
    pub pattern_color: String,
    pub pattern_opacity: f32,
    /// px
    pub pattern_size: u32,
    /// px from the viewport edge
    pub pattern_margin: u32,

    pub show_images: bool,
    pub left_image_url: String,
    pub right_image_url: String,
    /// px
    pub image_size: u32,
    /// px from the viewport edge
    pub image_margin: u32,

    pub labels: LyricsLabels,
}

impl Default for LyricsStyle {
    fn default() -> Self {
        Self {
            page_bg_color: "#dcfce7".to_string(),
            panel_bg_color: "#ffffff".to_string(),
            use_glass: true,
            text_color: "#374151".to_string(),
            font_family: "Quicksand".to_string(),
            font_size: 2.0,
            word_color: "#ea580c".to_string(),
            placeholder_color: "#dc2626".to_string(),
            title_color: "#15803d".to_string(),
            title_size: 2.5,
            author_color: "#666666".to_string(),
            author_size: 1.2,
            top_left_pattern: CornerPattern::Flower,
            bottom_right_pattern: CornerPattern::Flower,
            pattern_color: "#86efac".to_string(),
            pattern_opacity: 0.3,
            pattern_size: 200,
            pattern_margin: 20,
            show_images: true,
            left_image_url: String::new(),
            right_image_url: String::new(),
            image_size: 180,
            image_margin: 40,
            labels: LyricsLabels::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LyricsLabels {
    pub hide: String,
    pub show: String,
    pub hide_all: String,
    pub show_all: String,
    pub print: String,
    pub vocal: String,
    pub instrumental: String,
    pub switch_track: String,
    pub popup_blocked: String,
}

impl Default for LyricsLabels {
    fn default() -> Self {
        Self {
            hide: "Hide".to_string(),
            show: "Show".to_string(),
            hide_all: "All ▼".to_string(),
            show_all: "All ▲".to_string(),
            print: "Print".to_string(),
            vocal: "Vocal".to_string(),
            instrumental: "Instrumental".to_string(),
            switch_track: "Switch track".to_string(),
            popup_blocked: "Popup blocker may be active. Please allow popups to print.".to_string(),
        }
    }
}

/// Word-list cards, buttons and modal colors
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordListStyle {
    pub header_gradient1_start: String,
    pub header_gradient1_end: String,
    pub header_gradient2_start: String,
    pub header_gradient2_end: String,
    pub card_background: String,
    pub card_border: String,
    pub card_shadow_color: String,
    pub card_shadow_hover_color: String,
    pub button_background: String,
    pub button_text: String,
    pub button_hover_background: String,
    pub lesson_item_background: String,
    pub lesson_item_border: String,
    pub lesson_item_hover_bg: String,
    pub lesson_item_hover_border: String,
    pub lesson_name_color: String,
    pub modal_header_gradient_start: String,
    pub modal_header_gradient_end: String,
    pub modal_title_color: String,
    pub word_list_item_bg: String,
    pub word_list_item_border: String,
    pub word_list_item_color: String,
    pub word_list_item_hover_bg: String,
    pub word_list_item_hover_border: String,
    pub copy_button_bg: String,
    pub copy_button_hover_bg: String,
    pub labels: WordListLabels,
}

impl Default for WordListStyle {
    fn default() -> Self {
        Self {
            header_gradient1_start: "#7c6fea".to_string(),
            header_gradient1_end: "#a5a0f5".to_string(),
            header_gradient2_start: "#6eb5d9".to_string(),
            header_gradient2_end: "#8ec8e8".to_string(),
            card_background: "#ffffff".to_string(),
            card_border: "#e8e8f0".to_string(),
            card_shadow_color: "rgba(124, 111, 234, 0.08)".to_string(),
            card_shadow_hover_color: "rgba(124, 111, 234, 0.12)".to_string(),
            button_background: "#7c6fea".to_string(),
            button_text: "#ffffff".to_string(),
            button_hover_background: "#6b5dd9".to_string(),
            lesson_item_background: "#f8f9fc".to_string(),
            lesson_item_border: "#e8e8f0".to_string(),
            lesson_item_hover_bg: "#eeedfb".to_string(),
            lesson_item_hover_border: "#a5a0f5".to_string(),
            lesson_name_color: "#3d3d5c".to_string(),
            modal_header_gradient_start: "#7c6fea".to_string(),
            modal_header_gradient_end: "#e8a0bf".to_string(),
            modal_title_color: "#ffffff".to_string(),
            word_list_item_bg: "#f8f9fc".to_string(),
            word_list_item_border: "#e8e8f0".to_string(),
            word_list_item_color: "#3d3d5c".to_string(),
            word_list_item_hover_bg: "#eeedfb".to_string(),
            word_list_item_hover_border: "#a5a0f5".to_string(),
            copy_button_bg: "#6eb5d9".to_string(),
            copy_button_hover_bg: "#5ca8cf".to_string(),
            labels: WordListLabels::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordListLabels {
    pub open: String,
    pub copy: String,
    pub copied: String,
    pub copy_failed: String,
}

impl Default for WordListLabels {
    fn default() -> Self {
        Self {
            open: "Open".to_string(),
            copy: "Copy".to_string(),
            copied: "✓ Copied!".to_string(),
            copy_failed: "Copy failed".to_string(),
        }
    }
}

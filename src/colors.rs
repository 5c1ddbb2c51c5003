//! Color helpers and quick-theme presets

use crate::models::{FlashcardStyle, WordListStyle};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref HEX_RGB: Regex =
        Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").unwrap();
}

/// Fallback used by corner decorations when the color is not `#rrggbb`
pub const FALLBACK_RGB: (u8, u8, u8) = (134, 239, 172);

/// Parse `#rrggbb` (leading `#` optional)
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_RGB.captures(hex.trim())?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn shift(hex: &str, percent: f64, lighten: bool) -> String {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let amount = (2.55_f64 * percent).round() as i32;
    let adjust = |c: u8| {
        let v = if lighten { c as i32 + amount } else { c as i32 - amount };
        v.clamp(0, 255) as u8
    };
    to_hex((adjust(r), adjust(g), adjust(b)))
}

/// Add `percent`% of full scale to each channel; non-hex input is returned as-is
pub fn lighten(hex: &str, percent: f64) -> String {
    shift(hex, percent, true)
}

/// Subtract `percent`% of full scale from each channel
pub fn darken(hex: &str, percent: f64) -> String {
    shift(hex, percent, false)
}

/// A named palette offered as a one-click theme
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

pub const PRESETS: &[ColorPreset] = &[
    ColorPreset { name: "Purple", primary: "#7c6fea", secondary: "#6eb5d9", accent: "#e8a0bf" },
    ColorPreset { name: "Blue", primary: "#3b82f6", secondary: "#06b6d4", accent: "#8b5cf6" },
    ColorPreset { name: "Green", primary: "#22c55e", secondary: "#10b981", accent: "#84cc16" },
    ColorPreset { name: "Orange", primary: "#f97316", secondary: "#eab308", accent: "#ef4444" },
    ColorPreset { name: "Pink", primary: "#ec4899", secondary: "#f472b6", accent: "#a855f7" },
    ColorPreset { name: "Sea", primary: "#0ea5e9", secondary: "#38bdf8", accent: "#7dd3fc" },
    ColorPreset { name: "Forest", primary: "#15803d", secondary: "#22c55e", accent: "#4ade80" },
    ColorPreset { name: "Sun", primary: "#fbbf24", secondary: "#f59e0b", accent: "#fcd34d" },
    ColorPreset { name: "Coral", primary: "#fb7185", secondary: "#f43f5e", accent: "#fda4af" },
    ColorPreset { name: "Lavender", primary: "#a78bfa", secondary: "#8b5cf6", accent: "#c4b5fd" },
    ColorPreset { name: "Mint", primary: "#34d399", secondary: "#10b981", accent: "#6ee7b7" },
    ColorPreset { name: "Indigo", primary: "#6366f1", secondary: "#4f46e5", accent: "#818cf8" },
    ColorPreset { name: "Amber", primary: "#f59e0b", secondary: "#d97706", accent: "#fbbf24" },
    ColorPreset { name: "Ruby", primary: "#e11d48", secondary: "#be123c", accent: "#fb7185" },
    ColorPreset { name: "Turquoise", primary: "#14b8a6", secondary: "#0d9488", accent: "#5eead4" },
];

pub fn find_preset(name: &str) -> Option<&'static ColorPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl ColorPreset {
    /// Recolor a word-list style; colors the preset does not cover are kept
    pub fn apply_to_word_list(&self, style: &mut WordListStyle) {
        style.header_gradient1_start = self.primary.to_string();
        style.header_gradient1_end = lighten(self.primary, 30.0);
        style.header_gradient2_start = self.secondary.to_string();
        style.header_gradient2_end = lighten(self.secondary, 20.0);
        style.button_background = self.primary.to_string();
        style.button_hover_background = darken(self.primary, 15.0);
        style.modal_header_gradient_start = self.primary.to_string();
        style.modal_header_gradient_end = self.accent.to_string();
        style.lesson_item_hover_bg = lighten(self.primary, 45.0);
        style.lesson_item_hover_border = lighten(self.primary, 25.0);
        style.word_list_item_hover_bg = lighten(self.primary, 45.0);
        style.word_list_item_hover_border = lighten(self.primary, 25.0);
        style.copy_button_bg = self.secondary.to_string();
        style.copy_button_hover_bg = darken(self.secondary, 15.0);
    }

    pub fn apply_to_flashcards(&self, style: &mut FlashcardStyle) {
        style.border_color = self.primary.to_string();
        style.text_color = "#ffffff".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#86efac"), Some((134, 239, 172)));
        assert_eq!(hex_to_rgb("FF0000"), Some((255, 0, 0)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("red"), None);
    }

    #[test]
    fn test_lighten_clamps() {
        // 2.55 * 30 = 76.5 -> 77
        assert_eq!(lighten("#7c6fea", 30.0), "#c9bcff");
        assert_eq!(lighten("#ffffff", 10.0), "#ffffff");
    }

    #[test]
    fn test_darken_clamps() {
        // 2.55 * 15 = 38.25 -> 38
        assert_eq!(darken("#7c6fea", 15.0), "#5649c4");
        assert_eq!(darken("#000000", 50.0), "#000000");
    }

    #[test]
    fn test_non_hex_untouched() {
        assert_eq!(lighten("rgba(0,0,0,0.1)", 20.0), "rgba(0,0,0,0.1)");
    }

    #[test]
    fn test_apply_preset() {
        let mut style = WordListStyle::default();
        let preset = find_preset("blue").unwrap();
        preset.apply_to_word_list(&mut style);
        assert_eq!(style.button_background, "#3b82f6");
        assert_eq!(style.modal_header_gradient_end, "#8b5cf6");
        assert_eq!(style.card_background, "#ffffff");

        let mut cards = FlashcardStyle::default();
        preset.apply_to_flashcards(&mut cards);
        assert_eq!(cards.border_color, "#3b82f6");
    }
}

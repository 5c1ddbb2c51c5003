//! Fill-in-the-blank lyrics embed

use super::decorations::{corner_svg, side_image, Corner, Side};
use super::Capabilities;
use crate::error::GeneratorError;
use crate::escape::{AttrValue, CssValue, HtmlText, JsString, JsonData, TrustedHtml};
use crate::models::{LyricsDocument, LyricsStyle};
use crate::parse::{paragraphs_to_fragment, parse_paragraphs};
use crate::templates::{self, EmbedTemplate, LYRICS_RUNTIME, LYRICS_STYLES};
use serde::Serialize;

/// CSS custom properties set on the widget root
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CssVars {
    page_bg: CssValue,
    panel_bg: CssValue,
    text_color: CssValue,
    font_family: CssValue,
    font_size: CssValue,
    word_color: CssValue,
    placeholder_color: CssValue,
    title_color: CssValue,
    title_size: CssValue,
    author_color: CssValue,
    author_size: CssValue,
}

impl CssVars {
    fn from_style(style: &LyricsStyle) -> Self {
        let rem = |size: f32| CssValue::new(&format!("{}rem", size));
        Self {
            page_bg: CssValue::new(&style.page_bg_color),
            panel_bg: CssValue::new(&style.panel_bg_color),
            text_color: CssValue::new(&style.text_color),
            font_family: CssValue::new(&format!(
                "'{}', sans-serif",
                style.font_family.replace('\'', "")
            )),
            font_size: rem(style.font_size),
            word_color: CssValue::new(&style.word_color),
            placeholder_color: CssValue::new(&style.placeholder_color),
            title_color: CssValue::new(&style.title_color),
            title_size: rem(style.title_size),
            author_color: CssValue::new(&style.author_color),
            author_size: rem(style.author_size),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ButtonLabels {
    hide: HtmlText,
    hide_all: HtmlText,
    show_all: HtmlText,
    vocal: HtmlText,
    instrumental: HtmlText,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeLabels<'a> {
    hide: &'a str,
    show: &'a str,
    popup_blocked: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LyricsContext {
    id: AttrValue,
    id_js: JsString,
    vars: CssVars,
    styles: &'static str,

    title_js: JsString,
    author_js: JsString,
    vocal_url_js: JsString,
    instrumental_url_js: JsString,
    content_js: JsString,
    labels: JsonData,

    top_left_corner: TrustedHtml,
    bottom_right_corner: TrustedHtml,
    left_image: TrustedHtml,
    right_image: TrustedHtml,

    title: HtmlText,
    author: HtmlText,
    has_paragraphs: bool,
    paragraph_count: String,
    use_glass: bool,
    button_labels: ButtonLabels,
    print_title: AttrValue,
    switch_title: AttrValue,

    has_vocal: bool,
    vocal_url: AttrValue,
    dual_audio: bool,
    instrumental_url: AttrValue,

    runtime: &'static str,
}

pub(super) fn render(
    document: &LyricsDocument,
    style: &LyricsStyle,
    container_id: &str,
    capabilities: Capabilities,
) -> Result<String, GeneratorError> {
    let paragraphs = parse_paragraphs(&document.body_text);
    let fragment = paragraphs_to_fragment(&paragraphs);
    let labels = &style.labels;

    let vocal_url = document.vocal_audio_url.trim();
    let instrumental_url = if capabilities.dual_audio {
        document.instrumental().unwrap_or_default()
    } else {
        ""
    };

    let context = LyricsContext {
        id: AttrValue::new(container_id),
        id_js: JsString::new(container_id),
        vars: CssVars::from_style(style),
        styles: LYRICS_STYLES,

        title_js: JsString::new(&document.title),
        author_js: JsString::new(&document.author),
        vocal_url_js: JsString::new(vocal_url),
        instrumental_url_js: JsString::new(instrumental_url),
        content_js: JsString::new(fragment.as_str()),
        labels: JsonData::encode(&RuntimeLabels {
            hide: &labels.hide,
            show: &labels.show,
            popup_blocked: &labels.popup_blocked,
        })?,

        top_left_corner: corner_svg(Corner::TopLeft, style),
        bottom_right_corner: corner_svg(Corner::BottomRight, style),
        left_image: side_image(Side::Left, style),
        right_image: side_image(Side::Right, style),

        title: HtmlText::new(&document.title),
        author: HtmlText::new(&document.author),
        has_paragraphs: !paragraphs.is_empty(),
        paragraph_count: paragraphs.len().to_string(),
        use_glass: style.use_glass,
        button_labels: ButtonLabels {
            hide: HtmlText::new(&labels.hide),
            hide_all: HtmlText::new(&labels.hide_all),
            show_all: HtmlText::new(&labels.show_all),
            vocal: HtmlText::new(&labels.vocal),
            instrumental: HtmlText::new(&labels.instrumental),
        },
        print_title: AttrValue::new(&labels.print),
        switch_title: AttrValue::new(&labels.switch_track),

        has_vocal: !vocal_url.is_empty(),
        vocal_url: AttrValue::new(vocal_url),
        dual_audio: capabilities.dual_audio,
        instrumental_url: AttrValue::new(instrumental_url),

        runtime: LYRICS_RUNTIME,
    };

    log::debug!(
        "rendering lyrics with {} paragraph(s), dual audio: {}",
        paragraphs.len(),
        capabilities.dual_audio
    );
    templates::render(EmbedTemplate::Lyrics, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_vars_units() {
        let vars = CssVars::from_style(&LyricsStyle::default());
        assert_eq!(vars.font_size.as_str(), "2rem");
        assert_eq!(vars.author_size.as_str(), "1.2rem");
        assert_eq!(vars.font_family.as_str(), "'Quicksand', sans-serif");
    }

    #[test]
    fn test_font_family_quotes_removed() {
        let style = LyricsStyle {
            font_family: "Evil'Font".to_string(),
            ..Default::default()
        };
        assert_eq!(CssVars::from_style(&style).font_family.as_str(), "'EvilFont', sans-serif");
    }
}

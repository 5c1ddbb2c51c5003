//! Vocabulary word-list embed

use crate::error::GeneratorError;
use crate::escape::{AttrValue, CssValue, HtmlText, JsString, JsonData};
use crate::models::{Theme, WordListStyle};
use crate::templates::{self, EmbedTemplate, WORD_LIST_RUNTIME};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColorContext {
    header_gradient1_start: CssValue,
    header_gradient1_end: CssValue,
    header_gradient2_start: CssValue,
    header_gradient2_end: CssValue,
    card_background: CssValue,
    card_border: CssValue,
    card_shadow_color: CssValue,
    card_shadow_hover_color: CssValue,
    button_background: CssValue,
    button_text: CssValue,
    button_hover_background: CssValue,
    lesson_item_background: CssValue,
    lesson_item_border: CssValue,
    lesson_item_hover_bg: CssValue,
    lesson_item_hover_border: CssValue,
    lesson_name_color: CssValue,
    modal_header_gradient_start: CssValue,
    modal_header_gradient_end: CssValue,
    modal_title_color: CssValue,
    word_list_item_bg: CssValue,
    word_list_item_border: CssValue,
    word_list_item_color: CssValue,
    word_list_item_hover_bg: CssValue,
    word_list_item_hover_border: CssValue,
    copy_button_bg: CssValue,
    copy_button_hover_bg: CssValue,
}

impl ColorContext {
    fn from_style(s: &WordListStyle) -> Self {
        let c = |v: &String| CssValue::new(v);
        Self {
            header_gradient1_start: c(&s.header_gradient1_start),
            header_gradient1_end: c(&s.header_gradient1_end),
            header_gradient2_start: c(&s.header_gradient2_start),
            header_gradient2_end: c(&s.header_gradient2_end),
            card_background: c(&s.card_background),
            card_border: c(&s.card_border),
            card_shadow_color: c(&s.card_shadow_color),
            card_shadow_hover_color: c(&s.card_shadow_hover_color),
            button_background: c(&s.button_background),
            button_text: c(&s.button_text),
            button_hover_background: c(&s.button_hover_background),
            lesson_item_background: c(&s.lesson_item_background),
            lesson_item_border: c(&s.lesson_item_border),
            lesson_item_hover_bg: c(&s.lesson_item_hover_bg),
            lesson_item_hover_border: c(&s.lesson_item_hover_border),
            lesson_name_color: c(&s.lesson_name_color),
            modal_header_gradient_start: c(&s.modal_header_gradient_start),
            modal_header_gradient_end: c(&s.modal_header_gradient_end),
            modal_title_color: c(&s.modal_title_color),
            word_list_item_bg: c(&s.word_list_item_bg),
            word_list_item_border: c(&s.word_list_item_border),
            word_list_item_color: c(&s.word_list_item_color),
            word_list_item_hover_bg: c(&s.word_list_item_hover_bg),
            word_list_item_hover_border: c(&s.word_list_item_hover_border),
            copy_button_bg: c(&s.copy_button_bg),
            copy_button_hover_bg: c(&s.copy_button_hover_bg),
        }
    }
}

/// Values the runtime reads from `window.lwEmbedData`
///
/// Words and names are written into the page with `textContent`, so the
/// JSON carries them unescaped.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeData<'a> {
    themes: &'a [Theme],
    labels: RuntimeLabels<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeLabels<'a> {
    open: &'a str,
    copy: &'a str,
    copied: &'a str,
    copy_failed: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WordListContext {
    id: AttrValue,
    id_js: JsString,
    colors: ColorContext,
    data: JsonData,
    copy_label: HtmlText,
    runtime: &'static str,
}

pub(super) fn render(
    themes: &[Theme],
    style: &WordListStyle,
    container_id: &str,
) -> Result<String, GeneratorError> {
    let labels = &style.labels;
    let context = WordListContext {
        id: AttrValue::new(container_id),
        id_js: JsString::new(container_id),
        colors: ColorContext::from_style(style),
        data: JsonData::encode(&RuntimeData {
            themes,
            labels: RuntimeLabels {
                open: &labels.open,
                copy: &labels.copy,
                copied: &labels.copied,
                copy_failed: &labels.copy_failed,
            },
        })?,
        copy_label: HtmlText::new(&labels.copy),
        runtime: WORD_LIST_RUNTIME,
    };

    log::debug!("rendering word list with {} theme(s)", themes.len());
    templates::render(EmbedTemplate::WordList, &context)
}

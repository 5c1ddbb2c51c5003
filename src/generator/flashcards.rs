//! Flashcard grid embed

use super::pagination::paginate;
use super::print::render_print_sheet;
use super::Capabilities;
use crate::error::GeneratorError;
use crate::escape::{AttrValue, CssValue, HtmlText, JsString, JsonData};
use crate::models::{CardItem, FlashcardLabels, FlashcardStyle};
use crate::templates::{self, EmbedTemplate, FLASHCARDS_RUNTIME};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardContext {
    has_image: bool,
    image_url: AttrValue,
    text: HtmlText,
    has_lesson_code: bool,
    lesson_code: HtmlText,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageContext {
    index: String,
    first: bool,
    cards: Vec<CardContext>,
    print_label: HtmlText,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelContext {
    previous: HtmlText,
    next: HtmlText,
    indicator: HtmlText,
    hint: HtmlText,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlashcardsContext {
    id: AttrValue,
    id_js: JsString,
    border_color: CssValue,
    text_color: CssValue,
    multi_page: bool,
    pages: Vec<PageContext>,
    labels: LabelContext,
    data: JsonData,
    runtime: &'static str,
}

/// Values the runtime reads from `window.lwEmbedData`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeData<'a> {
    total_pages: usize,
    print_sheets: Vec<String>,
    labels: RuntimeLabels<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeLabels<'a> {
    page_indicator: &'a str,
    popup_blocked: &'a str,
}

fn page_indicator(labels: &FlashcardLabels, page: usize, total: usize) -> String {
    labels
        .page_indicator
        .replace("{page}", &page.to_string())
        .replace("{total}", &total.to_string())
}

fn print_label(labels: &FlashcardLabels, page: usize, multi_page: bool) -> String {
    let mut label = labels.print.clone();
    if multi_page {
        label.push_str(&labels.print_page.replace("{page}", &page.to_string()));
    }
    label.push_str(&labels.print_duplex);
    label
}

fn card_context(card: &CardItem) -> CardContext {
    let image_url = card.image_url.trim();
    CardContext {
        has_image: !image_url.is_empty(),
        image_url: AttrValue::new(image_url),
        text: HtmlText::new(&card.text),
        has_lesson_code: !card.lesson_code.is_empty(),
        lesson_code: HtmlText::new(&card.lesson_code),
    }
}

pub(super) fn render(
    cards: &[CardItem],
    style: &FlashcardStyle,
    container_id: &str,
    capabilities: Capabilities,
) -> Result<String, GeneratorError> {
    let pages = paginate(cards);
    let total = pages.len();
    let labels = &style.labels;
    let multi_page = capabilities.multi_page;

    let print_sheets = pages
        .iter()
        .enumerate()
        .map(|(i, page)| render_print_sheet(page, i + 1, style))
        .collect::<Result<Vec<_>, _>>()?;

    let data = JsonData::encode(&RuntimeData {
        total_pages: total,
        print_sheets,
        labels: RuntimeLabels {
            page_indicator: &labels.page_indicator,
            popup_blocked: &labels.popup_blocked,
        },
    })?;

    let page_contexts = pages
        .iter()
        .enumerate()
        .map(|(i, page)| PageContext {
            index: i.to_string(),
            first: i == 0,
            cards: page.iter().map(card_context).collect(),
            print_label: HtmlText::new(&print_label(labels, i + 1, multi_page)),
        })
        .collect();

    let mut hint = labels.hint.clone();
    if multi_page {
        hint.push_str(&labels.navigate_hint);
    }

    let context = FlashcardsContext {
        id: AttrValue::new(container_id),
        id_js: JsString::new(container_id),
        border_color: CssValue::new(&style.border_color),
        text_color: CssValue::new(&style.text_color),
        multi_page,
        pages: page_contexts,
        labels: LabelContext {
            previous: HtmlText::new(&labels.previous),
            next: HtmlText::new(&labels.next),
            indicator: HtmlText::new(&page_indicator(labels, 1, total)),
            hint: HtmlText::new(&hint),
        },
        data,
        runtime: FLASHCARDS_RUNTIME,
    };

    log::debug!("rendering {} flashcards on {} page(s)", cards.len(), total);
    templates::render(EmbedTemplate::Flashcards, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_label() {
        let labels = FlashcardLabels::default();
        assert_eq!(print_label(&labels, 2, true), "🖨️ Print Page 2 (Double-sided)");
        assert_eq!(print_label(&labels, 1, false), "🖨️ Print (Double-sided)");
    }

    #[test]
    fn test_page_indicator() {
        let labels = FlashcardLabels::default();
        assert_eq!(page_indicator(&labels, 1, 3), "Page 1 of 3");
    }

    #[test]
    fn test_card_without_image_has_no_img() {
        let context = card_context(&CardItem::new("  ", "x"));
        assert!(!context.has_image);
        let context = card_context(&CardItem::new(" https://img.test/a.png ", "x"));
        assert_eq!(context.image_url.as_str(), "https://img.test/a.png");
    }
}

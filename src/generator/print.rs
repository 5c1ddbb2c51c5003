//! Duplex print sheets for flashcard pages
//!
//! Each sheet is a complete HTML document: the front grid in card order,
//! a forced page break, then the back grid in mirrored order with the
//! caption drawn in the caption's own background color. The runtime writes
//! the sheet into a popup and prints it.

use super::pagination::back_slots;
use crate::error::GeneratorError;
use crate::escape::{AttrValue, CssValue, HtmlText};
use crate::models::{CardItem, FlashcardStyle};
use crate::templates::{self, EmbedTemplate};
use serde::Serialize;

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct SlotContext {
    blank: bool,
    has_image: bool,
    image_url: AttrValue,
    text: HtmlText,
    has_lesson_code: bool,
    lesson_code: HtmlText,
}

impl SlotContext {
    fn card(card: &CardItem) -> Self {
        Self {
            blank: false,
            has_image: !card.image_url.trim().is_empty(),
            image_url: AttrValue::new(card.image_url.trim()),
            text: HtmlText::new(&card.text),
            has_lesson_code: !card.lesson_code.is_empty(),
            lesson_code: HtmlText::new(&card.lesson_code),
        }
    }

    fn blank() -> Self {
        Self {
            blank: true,
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrintSheetContext {
    title: HtmlText,
    border_color: CssValue,
    text_color: CssValue,
    front: Vec<SlotContext>,
    back: Vec<SlotContext>,
}

/// Render the print document for one page of cards
pub fn render_print_sheet(
    page: &[CardItem],
    page_number: usize,
    style: &FlashcardStyle,
) -> Result<String, GeneratorError> {
    let back = back_slots(page.len())
        .iter()
        .map(|slot| match slot {
            Some(i) => SlotContext::card(&page[*i]),
            None => SlotContext::blank(),
        })
        .collect();

    let context = PrintSheetContext {
        title: HtmlText::new(&format!("Print {}", page_number)),
        border_color: CssValue::new(&style.border_color),
        text_color: CssValue::new(&style.text_color),
        front: page.iter().map(SlotContext::card).collect(),
        back,
    };
    templates::render(EmbedTemplate::PrintSheet, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> Vec<CardItem> {
        (0..n)
            .map(|i| CardItem::new(format!("https://img.test/{}.png", i), format!("word{}", i)))
            .collect()
    }

    fn back_half(sheet: &str) -> &str {
        let at = sheet.find("<div class=\"sheet back\">").unwrap();
        &sheet[at..]
    }

    #[test]
    fn test_sheet_is_landscape_duplex() {
        let sheet = render_print_sheet(&page(8), 1, &FlashcardStyle::default()).unwrap();
        assert!(sheet.contains("@page{size:A4 landscape;margin:10mm}"));
        assert!(sheet.contains(".sheet.back{page-break-before:always}"));
        assert!(sheet.contains(".back .caption{color:#FF6B9D}"));
        assert!(sheet.contains(".front .caption{color:#FFFFFF}"));
    }

    #[test]
    fn test_back_side_is_mirrored() {
        let sheet = render_print_sheet(&page(8), 1, &FlashcardStyle::default()).unwrap();
        let back = back_half(&sheet);
        let positions: Vec<usize> = (0..8)
            .map(|i| back.find(&format!(">word{}<", i)).unwrap())
            .collect();
        let mut order: Vec<usize> = (0..8).collect();
        order.sort_by_key(|i| positions[*i]);
        assert_eq!(order, vec![3, 2, 1, 0, 7, 6, 5, 4]);
    }

    #[test]
    fn test_short_page_has_blank_cells() {
        let sheet = render_print_sheet(&page(2), 2, &FlashcardStyle::default()).unwrap();
        let back = back_half(&sheet);
        assert_eq!(back.matches("card blank").count(), 6);
        assert!(back.find(">word1<").unwrap() < back.find(">word0<").unwrap());
    }

    #[test]
    fn test_card_text_is_escaped() {
        let cards = vec![CardItem::new("", "<script>alert(1)</script>").with_lesson_code("A&B")];
        let sheet = render_print_sheet(&cards, 1, &FlashcardStyle::default()).unwrap();
        assert!(!sheet.contains("<script>"));
        assert!(sheet.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(sheet.contains(">A&amp;B<"));
        assert!(!sheet.contains("<img"));
    }
}

//! Fill-in-the-blank lyrics parsing
//!
//! Blank lines separate paragraphs; the lines of a paragraph are joined with
//! `<br>`. Every `(word)` becomes a hideable span. Author text is escaped on
//! the way through, so the only markup in the result is the markup added
//! here.

use crate::escape::TrustedHtml;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HIDEABLE_WORD: Regex = Regex::new(r"\(([^)]+)\)").unwrap();
}

/// CSS class carried by every hideable word span
pub const WORD_CLASS: &str = "lw-word";

/// One parsed paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Inner markup (without the surrounding `<p>`)
    pub html: TrustedHtml,
    /// Number of `(word)` spans in the paragraph
    pub hideable_words: usize,
}

/// Split the body text into paragraphs
pub fn parse_paragraphs(body: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(build_paragraph(&current));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(build_paragraph(&current));
    }

    log::debug!("parsed {} lyric paragraphs", paragraphs.len());
    paragraphs
}

fn build_paragraph(lines: &[&str]) -> Paragraph {
    let mut html = TrustedHtml::default();
    let mut hideable_words = 0;

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            html.push_markup("<br>");
        }
        hideable_words += mark_hideable_words(line, &mut html);
    }

    Paragraph { html, hideable_words }
}

/// Escape `line` into `out`, wrapping each `(word)` in a span
fn mark_hideable_words(line: &str, out: &mut TrustedHtml) -> usize {
    let mut last = 0;
    let mut count = 0;
    for caps in HIDEABLE_WORD.captures_iter(line) {
        let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_text(&line[last..whole.start()]);
        out.push_markup(&format!("<span class=\"{}\">", WORD_CLASS));
        out.push_text(word.as_str());
        out.push_markup("</span>");
        last = whole.end();
        count += 1;
    }
    out.push_text(&line[last..]);
    count
}

/// Join paragraphs into the `<p>` fragment the runtime consumes
pub fn paragraphs_to_fragment(paragraphs: &[Paragraph]) -> TrustedHtml {
    let mut fragment = TrustedHtml::default();
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            fragment.push_markup("\n");
        }
        fragment.push_markup("<p>");
        fragment.push(&paragraph.html);
        fragment.push_markup("</p>");
    }
    fragment
}

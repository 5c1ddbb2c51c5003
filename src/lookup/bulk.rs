//! Bulk paste into the card list

use crate::models::CardItem;
use crate::parse::{bulk_lines, extract_file_id, normalize_drive_link, parse_filename};
use futures::future::join_all;
use serde::Serialize;

/// Resolves a Drive file id to its display name
///
/// Implementations report every failure as `None`; a failed lookup leaves
/// its card unchanged and never aborts the batch.
#[allow(async_fn_in_trait)]
pub trait FilenameSource {
    async fn filename(&self, file_id: &str) -> Option<String>;
}

/// Outcome of a bulk link paste
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    /// Links written into cards
    pub applied: usize,
    /// Cards whose caption and lesson code came from a filename
    pub resolved: usize,
    /// Lookups that failed or returned an empty name
    pub failed: usize,
}

/// Apply pasted links to the first cards, then fill captions from filenames
///
/// Links beyond the card count are ignored. All lookups run concurrently and
/// are merged by index once every one has settled.
pub async fn apply_bulk_links<S: FilenameSource>(cards: &mut [CardItem], text: &str, source: &S) -> BulkReport {
    let links: Vec<&str> = bulk_lines(text).into_iter().take(cards.len()).collect();
    for (card, link) in cards.iter_mut().zip(&links) {
        card.image_url = normalize_drive_link(link);
    }
    let mut report = BulkReport {
        applied: links.len(),
        ..Default::default()
    };

    let lookups = links
        .iter()
        .enumerate()
        .filter_map(|(index, link)| extract_file_id(link).map(|id| (index, id)))
        .map(|(index, id)| async move { (index, source.filename(id).await) });
    let results = join_all(lookups).await;

    for (index, filename) in results {
        match filename.filter(|name| !name.trim().is_empty()) {
            Some(name) => {
                let parsed = parse_filename(&name);
                cards[index].text = parsed.name;
                cards[index].lesson_code = parsed.lesson_code;
                report.resolved += 1;
            }
            None => report.failed += 1,
        }
    }

    log::info!(
        "bulk links: {} applied, {} resolved, {} failed",
        report.applied,
        report.resolved,
        report.failed
    );
    report
}

/// Apply pasted captions to the first cards; returns how many were applied
pub fn apply_bulk_texts(cards: &mut [CardItem], text: &str) -> usize {
    let lines = bulk_lines(text);
    let mut applied = 0;
    for (card, line) in cards.iter_mut().zip(lines) {
        card.text = line.to_string();
        applied += 1;
    }
    applied
}

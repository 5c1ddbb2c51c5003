//! Flashcard page math

use crate::models::{CardItem, PAGE_SIZE};

/// Split cards into pages of [`PAGE_SIZE`]; the last page may be shorter
pub fn paginate(cards: &[CardItem]) -> Vec<&[CardItem]> {
    cards.chunks(PAGE_SIZE).collect()
}

pub fn page_count(card_count: usize) -> usize {
    card_count.div_ceil(PAGE_SIZE)
}

/// Card index printed at each slot of the back side of a page
///
/// The two rows of four are mirrored left-to-right so a card's back lines
/// up with its front after a long-edge flip. Slots whose mirrored front
/// position is empty stay blank, so a short page keeps its alignment.
pub fn back_slots(page_len: usize) -> [Option<usize>; PAGE_SIZE] {
    const ROW: usize = PAGE_SIZE / 2;
    let mut slots = [None; PAGE_SIZE];
    for (slot, entry) in slots.iter_mut().enumerate() {
        let row_start = slot / ROW * ROW;
        let mirrored = row_start + (ROW - 1 - slot % ROW);
        if mirrored < page_len {
            *entry = Some(mirrored);
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<CardItem> {
        (0..n).map(CardItem::placeholder).collect()
    }

    #[test]
    fn test_page_sizes() {
        let ten = cards(10);
        let sizes: Vec<usize> = paginate(&ten).iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![8, 2]);

        let eight = cards(8);
        assert_eq!(paginate(&eight).len(), 1);
        assert!(paginate(&[]).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(8), 1);
        assert_eq!(page_count(9), 2);
        assert_eq!(page_count(24), 3);
    }

    #[test]
    fn test_full_page_mirror_order() {
        let order: Vec<usize> = back_slots(8).iter().map(|s| s.unwrap()).collect();
        assert_eq!(order, vec![3, 2, 1, 0, 7, 6, 5, 4]);
    }

    #[test]
    fn test_short_page_keeps_positions() {
        assert_eq!(
            back_slots(2),
            [None, None, Some(1), Some(0), None, None, None, None]
        );
        assert_eq!(
            back_slots(5),
            [Some(3), Some(2), Some(1), Some(0), None, None, None, Some(4)]
        );
    }
}

//! Card List
//!
//! Ordered card sequence with immutable splice updates.

use thiserror::Error;

use crate::models::{Card, CardId};

/// Errors from list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} out of range for list of {len} cards")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered list of cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Generate `count` cards with ids `1..=count`
    pub fn generate(count: usize) -> Self {
        let cards = (1..=u32::MAX)
            .take(count)
            .map(|n| Card::new(n, format!("This is element no {}", n)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Current position of a card
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Return a new list with the card at `from` removed and reinserted at `to`.
    ///
    /// Cards between the two positions shift by one toward the gap.
    pub fn moved(&self, from: usize, to: usize) -> Result<CardList, ListError> {
        let len = self.cards.len();
        for index in [from, to] {
            if index >= len {
                return Err(ListError::OutOfRange { index, len });
            }
        }

        let mut cards = self.cards.clone();
        let card = cards.remove(from);
        cards.insert(to, card);
        Ok(CardList { cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> CardList {
        CardList::new(vec![Card::new(1, "A"), Card::new(2, "B"), Card::new(3, "C")])
    }

    fn texts(list: &CardList) -> Vec<&str> {
        list.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_generate() {
        let list = CardList::generate(20);
        assert_eq!(list.len(), 20);
        for (k, card) in list.iter().enumerate() {
            assert_eq!(card.id, CardId(k as u32 + 1));
            assert!(card.text.contains(&(k + 1).to_string()));
        }
        assert_eq!(list.iter().next().unwrap().text, "This is element no 1");
        assert!(CardList::generate(0).is_empty());
    }

    #[test]
    fn test_move_down_and_up() {
        let list = abc();
        assert_eq!(texts(&list.moved(0, 2).unwrap()), ["B", "C", "A"]);
        assert_eq!(texts(&list.moved(2, 0).unwrap()), ["C", "A", "B"]);
        assert_eq!(texts(&list.moved(0, 1).unwrap()), ["B", "A", "C"]);
        // Source list untouched
        assert_eq!(texts(&list), ["A", "B", "C"]);
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let list = CardList::generate(5);
        for i in 0..5 {
            assert_eq!(list.moved(i, i).unwrap(), list);
        }
    }

    #[test]
    fn test_move_preserves_cards_and_shifts_by_one() {
        let list = CardList::generate(6);
        for from in 0..6 {
            for to in 0..6 {
                let moved = list.moved(from, to).unwrap();
                assert_eq!(moved.len(), list.len());

                let mut ids = moved.ids();
                ids.sort();
                assert_eq!(ids, list.ids());

                let card_id = list.ids()[from];
                assert_eq!(moved.index_of(card_id), Some(to));

                for card in list.iter().filter(|c| c.id != card_id) {
                    let before = list.index_of(card.id).unwrap() as isize;
                    let after = moved.index_of(card.id).unwrap() as isize;
                    assert!((after - before).abs() <= 1);
                    if from < to {
                        assert!(after <= before);
                    } else {
                        assert!(after >= before);
                    }
                }
            }
        }
    }

    #[test]
    fn test_move_out_of_range() {
        let list = abc();
        assert_eq!(list.moved(3, 0), Err(ListError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(list.moved(0, 5), Err(ListError::OutOfRange { index: 5, len: 3 }));
        assert!(CardList::default().moved(0, 0).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ListError::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for list of 2 cards");
    }

    // Full gesture: engine decision feeding the splice

    use leptos_dragdrop::{Bounds, DragItem, Gesture, HoverTarget, ItemKind, Point, SortGesture};

    const CARD: ItemKind = ItemKind("card");

    fn hover(gesture: &mut SortGesture, list: &CardList, index: usize, offset_y: f64) -> CardList {
        let top = index as f64 * 50.0;
        let target = HoverTarget { accepts: CARD, index, bounds: Bounds::new(top, top + 50.0) };
        match gesture.on_hover(Point::new(0.0, top + offset_y), target) {
            Some(reorder) => list.moved(reorder.from, reorder.to).unwrap(),
            None => list.clone(),
        }
    }

    #[test]
    fn test_drag_first_card_below_last() {
        let list = abc();
        let mut gesture = SortGesture::new();
        gesture.begin_gesture(DragItem { id: 1, kind: CARD, index: 0 });

        let list = hover(&mut gesture, &list, 2, 40.0);
        assert_eq!(texts(&list), ["B", "C", "A"]);
        assert_eq!(gesture.end_gesture().map(|i| i.index), Some(2));
    }

    #[test]
    fn test_drag_last_card_above_first() {
        let list = abc();
        let mut gesture = SortGesture::new();
        gesture.begin_gesture(DragItem { id: 3, kind: CARD, index: 2 });

        let list = hover(&mut gesture, &list, 0, 10.0);
        assert_eq!(texts(&list), ["C", "A", "B"]);
    }

    #[test]
    fn test_drag_back_and_forth_within_one_gesture() {
        let list = abc();
        let mut gesture = SortGesture::new();
        gesture.begin_gesture(DragItem { id: 1, kind: CARD, index: 0 });

        // Upper half of B while moving down: nothing yet
        let list = hover(&mut gesture, &list, 1, 20.0);
        assert_eq!(texts(&list), ["A", "B", "C"]);

        let list = hover(&mut gesture, &list, 1, 30.0);
        assert_eq!(texts(&list), ["B", "A", "C"]);

        // Jitter over own slot does nothing
        let list = hover(&mut gesture, &list, 1, 5.0);
        assert_eq!(texts(&list), ["B", "A", "C"]);

        // Back up over B's lower half: not yet; upper half: swap back
        let list = hover(&mut gesture, &list, 0, 40.0);
        assert_eq!(texts(&list), ["B", "A", "C"]);
        let list = hover(&mut gesture, &list, 0, 20.0);
        assert_eq!(texts(&list), ["A", "B", "C"]);
    }
}

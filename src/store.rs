//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{CardList, ListError};
use crate::models::CardId;

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards in display order
    pub cards: CardList,
}

impl BoardState {
    pub fn new(card_count: usize) -> Self {
        Self {
            cards: CardList::generate(card_count),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Move a card from one position to another, replacing the list
pub fn store_move_card(store: &BoardStore, from: usize, to: usize) -> Result<(), ListError> {
    let next = store.cards().with_untracked(|cards| cards.moved(from, to))?;
    tracing::debug!(from, to, "card moved");
    *store.cards().write() = next;
    Ok(())
}

/// Current index of a card (tracked)
pub fn store_index_of(store: &BoardStore, id: CardId) -> Option<usize> {
    store.cards().with(|cards| cards.index_of(id))
}

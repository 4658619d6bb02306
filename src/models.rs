//! Frontend Models
//!
//! Card data shown in the sortable list.

use serde::{Deserialize, Serialize};

/// Stable card identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card. Only its position in the list ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: CardId(id),
            text: text.into(),
        }
    }
}

//! Answer slots: one per letter of the hidden word.

use serde::{Deserialize, Serialize};

use super::TileId;

/// One position in the answer row.
///
/// Revealed slots are fixed hints the player never touches. Empty and
/// Filled slots flip back and forth as tiles move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Pre-revealed hint letter. Immutable for the whole round.
    Revealed(char),
    /// Waiting for a tile.
    Empty,
    /// Holds a placed tile and the letter it contributed.
    Filled { letter: char, tile: TileId },
}

impl Slot {
    /// The letter this slot contributes to the formed word, if any.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Slot::Revealed(c) | Slot::Filled { letter: c, .. } => Some(c),
            Slot::Empty => None,
        }
    }

    /// True if the slot still needs a tile.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// True if the slot is a pre-revealed hint.
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Slot::Revealed(_))
    }
}

//! Render-ready view of the whole session.
//!
//! A [`Snapshot`] is everything a UI needs to draw a frame and nothing it
//! must not know: the answer word itself never appears, only revealed and
//! placed letters. Snapshots are plain data - cheap to clone, serializable,
//! and comparable, which is what the deterministic-replay tests lean on.

use serde::{Deserialize, Serialize};

use crate::progression::Rank;
use crate::round::{Slot, Tile, TileId};

use super::Mood;

/// One answer slot as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotView {
    /// Fixed hint letter.
    Revealed(char),
    /// Letter placed by the player.
    Filled(char),
    /// Still blank.
    Empty,
}

impl From<Slot> for SlotView {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Revealed(c) => SlotView::Revealed(c),
            Slot::Filled { letter, .. } => SlotView::Filled(letter),
            Slot::Empty => SlotView::Empty,
        }
    }
}

/// One pool tile as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub letter: char,
    /// True if the tile currently sits in a slot.
    pub placed: bool,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id,
            letter: tile.letter,
            placed: !tile.state.is_available(),
        }
    }
}

/// Full observable state of the session at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Answer row, left to right. The hidden word is not exposed.
    pub slots: Vec<SlotView>,
    /// Tile pool in display order.
    pub tiles: Vec<TileView>,
    /// The clue for the current word.
    pub definition: String,
    pub xp: u32,
    pub lives: u32,
    pub rank: Rank,
    pub tier: u32,
    pub mood: Mood,
    /// True while judgment (or game over) is holding input.
    pub locked: bool,
    pub game_over: bool,
}

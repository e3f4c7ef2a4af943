//! Letter tiles and tile identity.
//!
//! Tiles are the draggable letters of a round. Each carries a [`TileId`]
//! unique within the session, so two tiles showing the same letter are
//! still distinguishable - the engine tracks which physical tile sits in
//! which slot, not just which letter.

use serde::{Deserialize, Serialize};

/// Unique tile identifier within a session.
///
/// Ordinals are opaque: callers compare them for equality and nothing
/// else. Fresh deals (and the undo-last policy) mint new ids from a
/// session-wide counter, so an id never refers to two different tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Allocator for session-unique tile IDs.
///
/// One allocator lives for the whole session; it is never reset between
/// rounds or restarts, which is what keeps ids unique across them.
#[derive(Clone, Debug, Default)]
pub struct TileIdAlloc {
    next: u32,
}

impl TileIdAlloc {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next tile ID.
    pub fn alloc(&mut self) -> TileId {
        let id = TileId::new(self.next);
        self.next += 1;
        id
    }
}

/// Where a tile currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    /// In the pool, tappable.
    Available,
    /// Sitting in the answer slot at this index.
    Placed(usize),
}

impl TileState {
    /// True if the tile is in the pool.
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, TileState::Available)
    }

    /// The slot index this tile occupies, if placed.
    #[must_use]
    pub fn slot(self) -> Option<usize> {
        match self {
            TileState::Placed(i) => Some(i),
            TileState::Available => None,
        }
    }
}

/// A single letter tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Session-unique identity.
    pub id: TileId,
    /// The letter this tile shows, lowercase ASCII.
    pub letter: char,
    /// Pool or placed.
    pub state: TileState,
}

impl Tile {
    /// Create an available tile.
    #[must_use]
    pub fn new(id: TileId, letter: char) -> Self {
        Self {
            id,
            letter,
            state: TileState::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_display() {
        let id = TileId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Tile(42)");
    }

    #[test]
    fn test_alloc_is_monotonic() {
        let mut alloc = TileIdAlloc::new();
        let a = alloc.alloc();
        let b = alloc.alloc();
        let c = alloc.alloc();

        assert_eq!(a, TileId::new(0));
        assert_eq!(b, TileId::new(1));
        assert_eq!(c, TileId::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_tile_starts_available() {
        let tile = Tile::new(TileId::new(0), 'k');
        assert!(tile.state.is_available());
        assert_eq!(tile.state.slot(), None);
    }

    #[test]
    fn test_placed_state() {
        let state = TileState::Placed(3);
        assert!(!state.is_available());
        assert_eq!(state.slot(), Some(3));
    }
}

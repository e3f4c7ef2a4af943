//! Round state: the masked word, its answer slots, and the tile pool.
//!
//! A round is dealt from a word, a definition, and the current difficulty
//! tier. Dealing reveals a tier-dependent fraction of the letters as fixed
//! hints, mints one tile per hidden letter, mixes in decoy tiles that never
//! duplicate an answer letter, and shuffles the pool for display.
//!
//! Placement always targets the first empty slot, so the player spells
//! left to right across the blanks. The round locks during judgment; every
//! mutator is a no-op while locked.

use smallvec::SmallVec;

use crate::core::GameRng;
use crate::progression::policy;

use super::{Slot, Tile, TileId, TileIdAlloc, TileState};

/// Live state of a single spelling round.
#[derive(Clone, Debug)]
pub struct RoundState {
    word: String,
    definition: String,
    slots: SmallVec<[Slot; 8]>,
    tiles: SmallVec<[Tile; 12]>,
    locked: bool,
    judged: bool,
}

impl RoundState {
    /// Deal a fresh round.
    ///
    /// Reveals `floor(len * reveal_fraction(tier))` letters (never all of
    /// them), mints a tile per hidden letter plus `decoy_count(tier)` decoy
    /// tiles, and shuffles the pool.
    ///
    /// # Panics
    ///
    /// Panics if `word` is empty.
    #[must_use]
    pub fn deal(
        word: &str,
        definition: &str,
        tier: u32,
        ids: &mut TileIdAlloc,
        rng: &mut GameRng,
    ) -> Self {
        assert!(!word.is_empty(), "Cannot deal a round from an empty word");

        let letters: Vec<char> = word.chars().collect();
        let len = letters.len();

        // Pick which positions come pre-revealed.
        let reveal_count = policy::reveal_count_for(len, tier);
        let mut positions: Vec<usize> = (0..len).collect();
        rng.shuffle(&mut positions);
        let mut revealed = vec![false; len];
        for &pos in positions.iter().take(reveal_count) {
            revealed[pos] = true;
        }

        let mut slots: SmallVec<[Slot; 8]> = SmallVec::with_capacity(len);
        let mut tiles: SmallVec<[Tile; 12]> = SmallVec::new();
        for (i, &c) in letters.iter().enumerate() {
            if revealed[i] {
                slots.push(Slot::Revealed(c));
            } else {
                slots.push(Slot::Empty);
                tiles.push(Tile::new(ids.alloc(), c));
            }
        }

        // Decoys never duplicate an answer letter. When the alphabet has
        // fewer spare letters than the tier asks for, deal what exists.
        let mut candidates: Vec<char> =
            ('a'..='z').filter(|c| !letters.contains(c)).collect();
        rng.shuffle(&mut candidates);
        for &c in candidates.iter().take(policy::decoy_count(tier)) {
            tiles.push(Tile::new(ids.alloc(), c));
        }

        rng.shuffle(&mut tiles);

        Self {
            word: word.to_string(),
            definition: definition.to_string(),
            slots,
            tiles,
            locked: false,
            judged: false,
        }
    }

    // === Placement ===

    /// Place an available tile into the first empty slot.
    ///
    /// Returns the slot index it landed in, or `None` if the round is
    /// locked, the tile is unknown or already placed, or no slot is empty.
    pub fn place_tile(&mut self, id: TileId) -> Option<usize> {
        if self.locked {
            return None;
        }
        let slot_idx = self.first_empty()?;
        let tile = self.tiles.iter_mut().find(|t| t.id == id)?;
        if !tile.state.is_available() {
            return None;
        }
        let letter = tile.letter;
        tile.state = TileState::Placed(slot_idx);
        self.slots[slot_idx] = Slot::Filled { letter, tile: id };
        Some(slot_idx)
    }

    /// Return the tile in `slot_idx` to the pool.
    ///
    /// Returns the tile that came back, or `None` if the round is locked,
    /// the index is out of range, or the slot is not filled. Revealed
    /// slots are never cleared.
    pub fn clear_slot(&mut self, slot_idx: usize) -> Option<TileId> {
        if self.locked || slot_idx >= self.slots.len() {
            return None;
        }
        match self.slots[slot_idx] {
            Slot::Filled { tile: id, .. } => {
                self.slots[slot_idx] = Slot::Empty;
                if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == id) {
                    tile.state = TileState::Available;
                }
                Some(id)
            }
            _ => None,
        }
    }

    /// Pop the most recent placement, returning the letter to the pool as
    /// a brand-new tile.
    ///
    /// Because placement always targets the first empty slot, the
    /// highest-index filled slot is the most recent one. Returns the slot
    /// index that was cleared and the fresh tile's id, or `None` if the
    /// round is locked or nothing is placed.
    pub fn undo_last(&mut self, ids: &mut TileIdAlloc) -> Option<(usize, TileId)> {
        if self.locked {
            return None;
        }
        let mut last = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Slot::Filled { letter, tile } = *slot {
                last = Some((i, letter, tile));
            }
        }
        let (slot_idx, letter, old_id) = last?;

        self.slots[slot_idx] = Slot::Empty;
        let fresh = ids.alloc();
        if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == old_id) {
            *tile = Tile::new(fresh, letter);
        }
        Some((slot_idx, fresh))
    }

    // === Judgment ===

    /// Mark the round judged and lock all input.
    pub fn begin_judgment(&mut self) {
        self.judged = true;
        self.locked = true;
    }

    /// Clear every filled slot and return all tiles to the pool, keeping
    /// revealed hints and tile identities intact. Unlocks the round.
    pub fn reset_for_retry(&mut self) {
        for slot in self.slots.iter_mut() {
            if matches!(slot, Slot::Filled { .. }) {
                *slot = Slot::Empty;
            }
        }
        for tile in self.tiles.iter_mut() {
            tile.state = TileState::Available;
        }
        self.judged = false;
        self.locked = false;
    }

    /// True if every slot holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    /// True if the round is complete and has not been judged yet.
    #[must_use]
    pub fn needs_judgment(&self) -> bool {
        self.is_complete() && !self.judged
    }

    /// The word the slots currently spell, or `None` while any slot is
    /// still empty.
    #[must_use]
    pub fn formed_word(&self) -> Option<String> {
        self.slots.iter().map(|s| s.letter()).collect()
    }

    // === Accessors ===

    /// The hidden answer word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The definition shown as the round's clue.
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// All answer slots, left to right.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The tile pool in display order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Index of the leftmost empty slot, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_empty())
    }

    /// How many slots still need a tile.
    #[must_use]
    pub fn blanks_remaining(&self) -> usize {
        self.slots.iter().filter(|s| s.is_empty()).count()
    }

    /// True while judgment (or game over) is holding input.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True once this round has been judged.
    #[must_use]
    pub fn is_judged(&self) -> bool {
        self.judged
    }
}

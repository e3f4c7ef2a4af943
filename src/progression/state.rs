//! Session-long progression: XP, lives, difficulty tier, word order.
//!
//! Progression owns the shuffled tour through the word bank. The cursor
//! walks the order one word per correct answer; completing a full pass
//! reshuffles and bumps the difficulty tier toward the configured cap.

use crate::core::{GameRng, WordBank};

use super::policy::{self, Rank};

/// XP, lives, tier, and the current position in the word tour.
#[derive(Clone, Debug)]
pub struct ProgressionState {
    xp: u32,
    lives: u32,
    tier: u32,
    word_order: Vec<String>,
    cursor: usize,
    game_over: bool,
}

impl ProgressionState {
    /// Start a fresh progression over `bank` at tier 1.
    ///
    /// # Panics
    ///
    /// Panics if the bank is empty.
    #[must_use]
    pub fn new(bank: &WordBank, starting_lives: u32, rng: &mut GameRng) -> Self {
        assert!(!bank.is_empty(), "Word bank must not be empty");
        Self {
            xp: 0,
            lives: starting_lives,
            tier: 1,
            word_order: bank.shuffled_words(rng),
            cursor: 0,
            game_over: starting_lives == 0,
        }
    }

    // === Accessors ===

    /// Accumulated XP.
    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Lives remaining.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current difficulty tier (starts at 1).
    #[must_use]
    pub fn tier(&self) -> u32 {
        self.tier
    }

    /// Rank implied by the current XP.
    #[must_use]
    pub fn rank(&self) -> Rank {
        policy::rank_for(self.xp)
    }

    /// True once lives have run out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The word the cursor points at.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.word_order[self.cursor]
    }

    // === Mutation ===

    /// Add XP.
    pub fn award_xp(&mut self, amount: u32) {
        self.xp += amount;
    }

    /// Lose one life, saturating at zero. Hitting zero ends the game.
    /// Returns the lives remaining.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
        }
        self.lives
    }

    /// Step the cursor to the next word.
    ///
    /// On wrapping past the end of the order, reshuffles the bank and
    /// raises the tier by one, up to `max_tier`. Returns `true` if the
    /// tour wrapped.
    pub fn advance(&mut self, bank: &WordBank, max_tier: u32, rng: &mut GameRng) -> bool {
        self.cursor += 1;
        if self.cursor < self.word_order.len() {
            return false;
        }
        self.word_order = bank.shuffled_words(rng);
        self.cursor = 0;
        self.tier = (self.tier + 1).min(max_tier);
        true
    }
}

//! Session configuration.
//!
//! A [`GameConfig`] fixes the tunable rules of a session at startup:
//! starting lives, XP per word, the difficulty-tier cap, the pause lengths
//! after a correct or wrong answer, and which undo style the caller wants.
//! The engine never hardcodes these values - defaults mirror the classic
//! rules, and builders override them one at a time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a placed tile can be taken back before judgment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoPolicy {
    /// Tapping a placed tile returns it to the pool; any filled slot can
    /// also be cleared directly. The tile keeps its identity.
    ToggleTile,
    /// Only the most recently filled slot can be undone. The returned
    /// letter comes back as a brand-new tile.
    UndoLast,
}

/// Complete session configuration.
///
/// Callers provide this at startup; [`GameConfig::default`] gives the
/// classic rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lives at the start of a session.
    pub starting_lives: u32,

    /// XP awarded per correctly spelled word.
    pub xp_per_word: u32,

    /// Difficulty tier ceiling. The tier climbs by one per full pass
    /// through the bank and never rises above this.
    pub max_tier: u32,

    /// Pause between a correct judgment and the next round.
    pub correct_delay: Duration,

    /// Pause between a wrong judgment and the retry unlock.
    pub wrong_delay: Duration,

    /// Which undo style the session uses.
    pub undo_policy: UndoPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            xp_per_word: 10,
            max_tier: 4,
            correct_delay: Duration::from_millis(1000),
            wrong_delay: Duration::from_millis(700),
            undo_policy: UndoPolicy::ToggleTile,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the classic rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set the XP awarded per word.
    #[must_use]
    pub fn with_xp_per_word(mut self, xp: u32) -> Self {
        self.xp_per_word = xp;
        self
    }

    /// Set the difficulty tier ceiling.
    #[must_use]
    pub fn with_max_tier(mut self, max_tier: u32) -> Self {
        self.max_tier = max_tier;
        self
    }

    /// Set the pause after a correct judgment.
    #[must_use]
    pub fn with_correct_delay(mut self, delay: Duration) -> Self {
        self.correct_delay = delay;
        self
    }

    /// Set the pause after a wrong judgment.
    #[must_use]
    pub fn with_wrong_delay(mut self, delay: Duration) -> Self {
        self.wrong_delay = delay;
        self
    }

    /// Set the undo style.
    #[must_use]
    pub fn with_undo_policy(mut self, policy: UndoPolicy) -> Self {
        self.undo_policy = policy;
        self
    }
}

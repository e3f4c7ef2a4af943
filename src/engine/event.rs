//! Engine events and the mascot mood.
//!
//! Every observable state change emits an [`EngineEvent`]. Hosts drain the
//! queue after each call and react (animate, play a sound, re-render).
//! Events are facts about what happened, not commands.

use serde::{Deserialize, Serialize};

use crate::round::TileId;

/// Something the engine did that a host may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A fresh round was dealt.
    RoundDealt {
        /// Slots the player must fill.
        blanks: usize,
        /// Tiles in the pool, decoys included.
        tiles: usize,
    },
    /// A tile landed in a slot.
    TilePlaced { tile: TileId, slot: usize },
    /// A tile went back to the pool.
    TileReturned { tile: TileId, slot: usize },
    /// The completed word matched the answer.
    Correct { xp: u32 },
    /// The completed word did not match.
    Incorrect { lives_left: u32 },
    /// The round was cleared for another attempt.
    RoundReset,
    /// A full pass through the bank raised the difficulty.
    TierAdvanced { tier: u32 },
    /// Lives ran out.
    GameOver,
    /// The session was restarted from scratch.
    Restarted,
    /// The session switched to a different word bank.
    BankSwitched,
}

/// What the mascot should be doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    /// Waiting for input.
    #[default]
    Idle,
    /// Celebrating a correct answer.
    Cheer,
    /// Mourning a wrong answer.
    Cry,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mood::Idle => "idle",
            Mood::Cheer => "cheer",
            Mood::Cry => "cry",
        };
        write!(f, "{name}")
    }
}

//! # kingdom-spellers
//!
//! A single-player word-spelling puzzle engine for young learners.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random draw flows through one seeded RNG,
//!    so a session replays exactly from its seed and input sequence.
//!
//! 2. **Headless**: No rendering, audio, or timers. The engine emits
//!    events, exposes snapshots, and lets the host drive the clock.
//!
//! 3. **Configuration Over Convention**: Lives, XP, delays, the tier cap,
//!    and the undo style are all `GameConfig` knobs, not constants baked
//!    into the logic.
//!
//! ## Architecture
//!
//! A session deals one round at a time: the answer word is masked, a
//! tier-dependent fraction of its letters comes pre-revealed, and the
//! player fills the blanks from a shuffled pool of letter tiles salted
//! with decoys. Filling the last blank triggers judgment. Correct answers
//! award XP and schedule the next word; wrong answers cost a life and
//! schedule a retry of the same word. Time is virtual - the host reports
//! elapsed time through `SpellingGame::tick`.
//!
//! ## Modules
//!
//! - `core`: RNG, word banks, configuration
//! - `round`: Slots, tiles, and the per-round state machine
//! - `progression`: Difficulty policy, ranks, XP, and lives
//! - `engine`: The session loop, events, scheduler, snapshots, speech
//! - `banks`: Built-in graded vocabularies

pub mod core;
pub mod round;
pub mod progression;
pub mod engine;
pub mod banks;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, UndoPolicy, WordBank, WordEntry, STOCK_DEFINITION};

pub use crate::round::{RoundState, Slot, Tile, TileId, TileIdAlloc, TileState};

pub use crate::progression::{
    decoy_count, rank_for, reveal_count_for, reveal_fraction, ProgressionState, Rank,
    RANK_KING_XP, RANK_KNIGHT_XP,
};

pub use crate::engine::{
    EngineEvent, Mood, NullSpeaker, Scheduler, Snapshot, SlotView, Speaker, SpellingGame,
    TileView, Transition,
};

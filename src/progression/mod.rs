//! Progression: difficulty policy, ranks, XP, and lives.

pub mod policy;
pub mod state;

pub use policy::{
    decoy_count, rank_for, reveal_count_for, reveal_fraction, Rank, RANK_KING_XP, RANK_KNIGHT_XP,
};
pub use state::ProgressionState;

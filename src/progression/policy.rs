//! The difficulty curve and rank ladder.
//!
//! Pure functions of tier and XP. The round engine consults these when
//! dealing; nothing here holds state.

use serde::{Deserialize, Serialize};

/// XP threshold for the knight rank.
pub const RANK_KNIGHT_XP: u32 = 150;

/// XP threshold for the king rank.
pub const RANK_KING_XP: u32 = 300;

/// Player rank, derived from XP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Esquire,
    Knight,
    King,
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Esquire => "esquire",
            Rank::Knight => "knight",
            Rank::King => "king",
        };
        write!(f, "{name}")
    }
}

/// Fraction of a word's letters revealed as hints at this tier.
///
/// Tier 1 gives most of the word away; tiers at the cap give nothing.
#[must_use]
pub fn reveal_fraction(tier: u32) -> f64 {
    match tier {
        0 | 1 => 0.75,
        2 => 0.5,
        3 => 0.25,
        _ => 0.0,
    }
}

/// How many decoy tiles a round at this tier mixes into the pool.
#[must_use]
pub fn decoy_count(tier: u32) -> usize {
    match tier {
        0 | 1 => 3,
        2 => 5,
        _ => 7,
    }
}

/// Concrete reveal count for a word of `len` letters at `tier`.
///
/// Floors the fraction and caps at `len - 1`, so at least one letter is
/// always left for the player to spell.
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn reveal_count_for(len: usize, tier: u32) -> usize {
    assert!(len >= 1, "Cannot compute a reveal count for an empty word");
    let by_fraction = (len as f64 * reveal_fraction(tier)).floor() as usize;
    by_fraction.min(len - 1)
}

/// The rank a player at `xp` holds.
#[must_use]
pub fn rank_for(xp: u32) -> Rank {
    if xp >= RANK_KING_XP {
        Rank::King
    } else if xp >= RANK_KNIGHT_XP {
        Rank::Knight
    } else {
        Rank::Esquire
    }
}

//! Deterministic random number generation.
//!
//! Every random draw in the engine - word-order shuffles, mask-position
//! selection, decoy-letter draws, tile-pool display order - flows through a
//! single seeded [`GameRng`], so a session is fully reproducible from its
//! seed and input sequence.
//!
//! ```
//! use kingdom_spellers::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic seedable RNG.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Tests construct one with a fixed seed and assert exact outcomes;
/// real sessions seed from entropy.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from system entropy.
    ///
    /// The drawn seed is still recorded, so a surprising session can be
    /// replayed by reading it back with [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

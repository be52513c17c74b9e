//! Deterministic random number generation.
//!
//! Same seed, same sequence: a seeded deal is replayable, and two games
//! started from the same seed see identical shuffles.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the seeded deck source.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

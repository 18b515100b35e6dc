//! Deterministic random number generation for dealing.
//!
//! The same seed always produces the same deal, which keeps sessions
//! reproducible from the command line and in tests.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Seeded RNG used to shuffle decks.
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    #[instrument]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().next_u64();
        tracing::debug!(seed, "Seeded RNG from entropy");
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        GameRng::new(7).shuffle(&mut a);
        GameRng::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut values: Vec<u32> = (0..50).collect();
        GameRng::new(99).shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}

//! Deterministic random number generation for game lineages.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Derivable**: Named streams are seeded from the snapshot seed, so a
//!   game rebuilt from a snapshot makes the same choices
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use codenames_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same permutation
//! assert_eq!(a.permutation(10), b.permutation(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
///
/// Seeds are signed 64-bit values so they can be stored verbatim in a
/// [`Snapshot`](crate::core::Snapshot). Serializes as a [`GameRngState`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: i64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed as u64),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Only for minting new lineages; anything that must be reproducible
    /// from a snapshot goes through [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Draw a fresh non-negative 63-bit seed for a new lineage.
    pub fn next_seed(&mut self) -> i64 {
        self.inner.gen_range(0..=i64::MAX)
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

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// A pseudo-random permutation of `0..n`.
    #[must_use]
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        self.shuffle(&mut perm);
        perm
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed as u64);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: i64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(rng1.permutation(50), rng2.permutation(50));
    }

    #[test]
    fn test_negative_seed() {
        let mut rng1 = GameRng::new(-7);
        let mut rng2 = GameRng::new(-7);

        assert_eq!(rng1.seed(), -7);
        assert_eq!(rng1.permutation(20), rng2.permutation(20));
    }

    #[test]
    fn test_permutation_covers_range() {
        let mut rng = GameRng::new(42);
        let mut perm = rng.permutation(100);

        assert_ne!(perm, (0..100).collect::<Vec<_>>());
        perm.sort_unstable();
        assert_eq!(perm, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_permutation_empty() {
        let mut rng = GameRng::new(42);
        assert!(rng.permutation(0).is_empty());
    }

    #[test]
    fn test_next_seed_non_negative() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_seed() >= 0);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_rng_serde_resumes_stream() {
        let mut rng = GameRng::new(9);
        rng.permutation(30);

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();

        assert_eq!(rng.permutation(30), restored.permutation(30));
    }
}

//! Restart-durable game snapshots.
//!
//! A [`Snapshot`] is the minimal state needed to rebuild a game after a
//! process restart: the lineage seed, which slice of the shared word set
//! the current game uses, the round counter and the reveal flags.
//!
//! ## Lineages
//!
//! Successive games that share a seed draw consecutive 25-word slices
//! from one permutation of the word set, so no word repeats until the set
//! is exhausted. [`Snapshot::advance`] moves to the next slice and re-rolls
//! the seed once the next slice would run past the end.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::WORDS_PER_GAME;
use super::error::GameResult;
use super::rng::GameRng;

/// Minimal state for rebuilding a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Seeds every derived stream for this lineage.
    pub seed: i64,

    /// Offset of the current game's slice in the word-set permutation.
    pub perm_index: usize,

    /// Turns taken in the current game.
    pub round: u32,

    /// One flag per word of the current game.
    pub revealed: Vec<bool>,

    /// The full shared vocabulary.
    pub word_set: Vec<String>,
}

impl Snapshot {
    /// Start a new lineage over `word_set`.
    pub fn fresh(word_set: Vec<String>, rng: &mut GameRng) -> Self {
        Self {
            seed: rng.next_seed(),
            perm_index: 0,
            round: 0,
            revealed: Vec::new(),
            word_set,
        }
    }

    /// The snapshot for the next game in this lineage.
    ///
    /// Re-rolls the seed and restarts at offset 0 when the next slice would
    /// reach the end of the word set.
    #[must_use]
    pub fn advance(&self, rng: &mut GameRng) -> Self {
        let mut next = Self {
            seed: self.seed,
            perm_index: self.perm_index + WORDS_PER_GAME,
            round: 0,
            revealed: Vec::new(),
            word_set: self.word_set.clone(),
        };

        if next.perm_index + WORDS_PER_GAME >= next.word_set.len() {
            next.seed = rng.next_seed();
            next.perm_index = 0;
            debug!(
                old_seed = self.seed,
                new_seed = next.seed,
                word_set_len = next.word_set.len(),
                "word set exhausted, re-rolled lineage"
            );
        }

        next
    }

    /// Whether any word has been revealed.
    #[must_use]
    pub fn any_revealed(&self) -> bool {
        self.revealed.iter().any(|&r| r)
    }

    /// Encode into the compact binary form.
    pub fn to_bytes(&self) -> GameResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`Snapshot::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> GameResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

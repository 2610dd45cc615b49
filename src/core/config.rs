//! Per-game options.
//!
//! `random_words` is the only option the engine acts on: it decides whether
//! the word pool is drawn from the snapshot's word set or typed in during
//! setup. The timer options are carried for callers; the engine only
//! stamps `round_started_at`.

use serde::{Deserialize, Serialize};

/// Words drawn from the shared word set for each game.
pub const WORDS_PER_GAME: usize = 25;

/// Options chosen when a game is created.
///
/// Flattened into the game record; unset values are omitted on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Round length for callers that run a timer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_duration_ms: Option<i64>,

    /// Whether callers should end rounds when the timer runs out.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enforce_timer: bool,

    /// Draw the word pool from the word set instead of `add_word` calls.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub random_words: bool,
}

impl GameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the advisory round length.
    #[must_use]
    pub fn with_timer(mut self, duration_ms: i64) -> Self {
        self.timer_duration_ms = Some(duration_ms);
        self
    }

    /// Ask callers to enforce the round timer.
    #[must_use]
    pub fn enforce_timer(mut self) -> Self {
        self.enforce_timer = true;
        self
    }

    /// Draw words from the shared word set.
    #[must_use]
    pub fn random_words(mut self) -> Self {
        self.random_words = true;
        self
    }
}

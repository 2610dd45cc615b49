//! # codenames-engine
//!
//! Authoritative state machine for one session of a team-based
//! word-guessing party game.
//!
//! ## Design Principles
//!
//! 1. **Snapshot-Durable**: A game is rebuilt from a small [`Snapshot`]
//!    (seed, permutation offset, round, reveal flags, word set).
//!
//! 2. **Deterministic**: All randomness that must survive a restart comes
//!    from streams seeded by the snapshot, never from global state.
//!
//! 3. **Synchronous**: Every operation is in-memory and completes
//!    immediately. Callers serialize access to a game.
//!
//! ## Lifecycle
//!
//! ```
//! use codenames_engine::{Game, GameOptions, GameRng, Snapshot, Stage};
//!
//! let words: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();
//! let mut rng = GameRng::new(7);
//!
//! let snapshot = Snapshot::fresh(words, &mut rng);
//! let mut game = Game::new("g1", snapshot.clone(), GameOptions::new().random_words());
//! assert_eq!(game.stage(), Stage::Setup);
//! assert_eq!(game.words().len(), 25);
//!
//! game.next_word(false);
//! assert!(!game.current_word().is_empty());
//!
//! // The next game in the lineage draws a fresh slice of words.
//! let next = Game::new("g2", snapshot.advance(&mut rng), GameOptions::new().random_words());
//! assert!(next.words().iter().all(|w| !game.words().contains(w)));
//! ```
//!
//! ## Modules
//!
//! - `core`: Teams, stages, options, snapshots, RNG, errors
//! - `engine`: The [`Game`] state machine

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameOptions, GameResult, GameRng, GameRngState, Snapshot, Stage, Team, TeamPlayer,
    TeamPoint, WORDS_PER_GAME,
};

pub use crate::engine::{routing_order, Game};

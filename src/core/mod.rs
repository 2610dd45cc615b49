//! Core types: teams, stages, options, snapshots, RNG and errors.
//!
//! Everything here is plain data. The state machine that mutates it lives
//! in [`crate::engine`].

pub mod config;
pub mod error;
pub mod rng;
pub mod snapshot;
pub mod stage;
pub mod team;

pub use config::{GameOptions, WORDS_PER_GAME};
pub use error::{GameError, GameResult};
pub use rng::{GameRng, GameRngState};
pub use snapshot::Snapshot;
pub use stage::Stage;
pub use team::{Team, TeamPlayer, TeamPoint};

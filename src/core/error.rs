//! Error types for game operations.

use thiserror::Error;

use super::stage::Stage;

/// Errors returned by game operations.
///
/// All variants are recoverable. A failed operation leaves the game
/// record unchanged.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot {action} during the {stage} stage")]
    InvalidStage { action: &'static str, stage: Stage },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("snapshot codec error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type GameResult<T> = Result<T, GameError>;

//! Game stages.
//!
//! Stages run in strict forward order:
//!
//! `Setup → EndSetup → Explain → EndExplain → Gestures → EndGestures → OneWord → EndOneWord`
//!
//! Only `Setup` accepts roster and word edits. `OneWord` is the last play
//! stage; leaving it decides the game instead of advancing.

use serde::{Deserialize, Serialize};

/// One phase of the clue-giving cycle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Setup,
    EndSetup,
    Explain,
    EndExplain,
    Gestures,
    EndGestures,
    OneWord,
    EndOneWord,
}

impl Stage {
    /// Every stage, in order.
    pub const ALL: [Stage; 8] = [
        Stage::Setup,
        Stage::EndSetup,
        Stage::Explain,
        Stage::EndExplain,
        Stage::Gestures,
        Stage::EndGestures,
        Stage::OneWord,
        Stage::EndOneWord,
    ];

    /// The following stage, or `None` after `EndOneWord`.
    #[must_use]
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::Setup => Some(Stage::EndSetup),
            Stage::EndSetup => Some(Stage::Explain),
            Stage::Explain => Some(Stage::EndExplain),
            Stage::EndExplain => Some(Stage::Gestures),
            Stage::Gestures => Some(Stage::EndGestures),
            Stage::EndGestures => Some(Stage::OneWord),
            Stage::OneWord => Some(Stage::EndOneWord),
            Stage::EndOneWord => None,
        }
    }

    /// Whether roster and word edits are allowed.
    #[must_use]
    pub const fn is_setup(self) -> bool {
        matches!(self, Stage::Setup)
    }

    /// Whether leaving this stage ends the game.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Stage::OneWord | Stage::EndOneWord)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Setup => "setup",
            Stage::EndSetup => "endsetup",
            Stage::Explain => "explain",
            Stage::EndExplain => "endexplain",
            Stage::Gestures => "gestures",
            Stage::EndGestures => "endgestures",
            Stage::OneWord => "oneword",
            Stage::EndOneWord => "endoneword",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

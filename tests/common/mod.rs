//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use codenames_engine::{Team, TeamPlayer};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// `n` distinct words.
pub fn word_set(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word-{i:04}")).collect()
}

pub fn red(name: &str) -> TeamPlayer {
    TeamPlayer::new(Team::Red, name)
}

pub fn blue(name: &str) -> TeamPlayer {
    TeamPlayer::new(Team::Blue, name)
}

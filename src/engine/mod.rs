//! The game state machine.
//!
//! [`Game`] owns one session's record. Its operations are split by concern:
//!
//! - `game`: construction, accessors, turns, snapshots
//! - `roster`: setup-stage word and player edits
//! - `routing`: turn order over seated players
//! - `scoring`: word draws, points, stage transitions, winner
//! - `board`: board-reveal variant

mod board;
mod game;
mod roster;
mod routing;
mod scoring;

pub use game::Game;
pub use routing::routing_order;

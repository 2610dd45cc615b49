//! Turn order over seated players.
//!
//! The routing order alternates Red and Blue, starting with the starting
//! team's parity, and cycles each side independently. A full rotation is
//! `2 * reds * blues` turns long, so every Red player gets `blues` turns
//! and every Blue player `reds` turns before the order repeats. When the
//! side sizes are coprime, each Red player is followed by each Blue player
//! exactly once per rotation.
//!
//! A side with no players makes the rotation length zero.

use smallvec::SmallVec;

use crate::core::{Team, TeamPlayer};

use super::game::Game;

/// Build the routing order for `team_players`.
#[must_use]
pub fn routing_order(team_players: &[TeamPlayer], starting_team: Team) -> Vec<TeamPlayer> {
    let red: SmallVec<[&TeamPlayer; 8]> =
        team_players.iter().filter(|tp| tp.team == Team::Red).collect();
    let blue: SmallVec<[&TeamPlayer; 8]> =
        team_players.iter().filter(|tp| tp.team == Team::Blue).collect();

    let rotation = red.len() * blue.len() * 2;
    let mut order = Vec::with_capacity(rotation);
    let mut slot = starting_team.parity();
    let (mut red_count, mut blue_count) = (0, 0);

    while order.len() < rotation {
        if slot % 2 == 0 {
            if !red.is_empty() {
                order.push(red[red_count % red.len()].clone());
                red_count += 1;
            }
        } else if !blue.is_empty() {
            order.push(blue[blue_count % blue.len()].clone());
            blue_count += 1;
        }
        slot += 1;
    }

    order
}

impl Game {
    /// The player whose turn it is, if anyone is routed.
    #[must_use]
    pub fn current_routed_player(&self) -> Option<&TeamPlayer> {
        self.routing_order.get(self.current_player)
    }

    pub(crate) fn rebuild_routing_order(&mut self) {
        self.routing_order = routing_order(&self.team_players, self.starting_team);
    }

    /// Advance `current_player`, wrapping at the end of the routing order.
    pub(crate) fn next_player(&mut self) {
        if self.current_player + 1 >= self.routing_order.len() {
            self.current_player = 0;
        } else {
            self.current_player += 1;
        }
    }
}

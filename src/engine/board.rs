//! Board-reveal variant.
//!
//! Each word is dealt to a team. Revealing a cell scores it for its owner,
//! and a team wins once none of its cells remain hidden.

use tracing::debug;

use crate::core::{GameError, GameResult, Team};

use super::game::Game;

impl Game {
    /// Deal a layout over the current words and hide every cell.
    ///
    /// The starting team gets a third of the cells rounded up, the other
    /// team a third rounded down, and the rest are Neutral. For a 25-word
    /// board that is 9 / 8 / 8.
    pub fn deal_layout(&mut self) {
        let cells = self.words.len();
        let starting = cells.div_ceil(3);
        let other = cells / 3;

        let mut layout = self.starting_team.repeat(starting);
        layout.extend(self.starting_team.other().repeat(other));
        layout.extend(Team::Neutral.repeat(cells - starting - other));
        self.choice_rng().shuffle(&mut layout);

        self.layout = layout;
        self.state.revealed = vec![false; cells];
        self.touch();
    }

    /// Reveal one board cell.
    ///
    /// Revealing a cell twice is a no-op.
    pub fn reveal(&mut self, index: usize) -> GameResult<()> {
        let (Some(&team), Some(&revealed)) =
            (self.layout.get(index), self.state.revealed.get(index))
        else {
            return Err(GameError::NotFound {
                kind: "cell",
                name: index.to_string(),
            });
        };
        if revealed {
            return Ok(());
        }

        self.state.revealed[index] = true;
        if team != Team::Neutral {
            self.award_point(team);
        }
        self.check_winning_condition();
        self.touch();
        Ok(())
    }

    /// Declare a winner once a team has no hidden cells left.
    ///
    /// Red is checked first. An existing winner is never replaced, and an
    /// empty layout decides nothing.
    pub fn check_winning_condition(&mut self) {
        if self.winning_team.is_some() || self.layout.is_empty() {
            return;
        }

        let remaining = |team: Team| {
            self.layout
                .iter()
                .zip(&self.state.revealed)
                .any(|(&cell, &revealed)| cell == team && !revealed)
        };

        let winner = if !remaining(Team::Red) {
            Some(Team::Red)
        } else if !remaining(Team::Blue) {
            Some(Team::Blue)
        } else {
            None
        };

        if let Some(winner) = winner {
            debug!(game_id = %self.id, winner = %winner, "board cleared");
            self.winning_team = Some(winner);
        }
    }
}

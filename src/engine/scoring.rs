//! Word draws, scoring and stage transitions.
//!
//! A stage ends when its word pool is exhausted: the draw after the last
//! correct guess finds nothing unrevealed and moves the game on. Leaving
//! the final play stage decides the winner from the score table.

use tracing::{debug, trace};

use crate::core::Team;

use super::game::Game;

impl Game {
    /// Report the outcome for the current word and draw the next one.
    ///
    /// On `correct`, the acting team scores a point and every copy of the
    /// current word is revealed. With nothing left to draw, the game moves
    /// to the next stage.
    pub fn next_word(&mut self, correct: bool) {
        if correct {
            self.award_point(self.current_team());
            let current = &self.current_word;
            for (revealed, word) in self.state.revealed.iter_mut().zip(&self.words) {
                if word == current {
                    *revealed = true;
                }
            }
        }

        let available: Vec<usize> = self
            .words
            .iter()
            .zip(&self.state.revealed)
            .enumerate()
            .filter(|(_, (_, &revealed))| !revealed)
            .map(|(idx, _)| idx)
            .collect();

        match self.choice_rng().choose(&available) {
            Some(&idx) => {
                self.current_word = self.words[idx].clone();
                trace!(game_id = %self.id, remaining = available.len(), "drew word");
            }
            None => self.move_to_next_stage(),
        }
        self.touch();
    }

    /// Words not yet revealed in this stage, in board order.
    #[must_use]
    pub fn available_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .zip(&self.state.revealed)
            .filter(|(_, &revealed)| !revealed)
            .map(|(word, _)| word.as_str())
            .collect()
    }

    /// Advance to the next stage, or decide the winner when leaving the
    /// final play stage.
    pub fn move_to_next_stage(&mut self) {
        let next = if self.stage.is_final() { None } else { self.stage.next() };
        match next {
            Some(next) => {
                debug!(game_id = %self.id, from = %self.stage, to = %next, "stage advanced");
                self.stage = next;
                self.state.revealed = vec![false; self.words.len()];
                self.current_word.clear();
            }
            None => self.set_winning_team(),
        }
        self.touch();
    }

    pub(crate) fn award_point(&mut self, team: Team) {
        for tp in self.team_points.iter_mut().filter(|tp| tp.team == team) {
            tp.points += 1;
        }
        self.touch();
    }

    /// The team with strictly the most points wins; a tie is Neutral.
    fn set_winning_team(&mut self) {
        let top = self.team_points.iter().map(|tp| tp.points).max().unwrap_or(0);
        let mut leaders = self.team_points.iter().filter(|tp| tp.points == top);

        let winner = match (leaders.next(), leaders.next()) {
            (Some(leader), None) => leader.team,
            _ => Team::Neutral,
        };

        debug!(game_id = %self.id, winner = %winner, "game decided");
        self.winning_team = Some(winner);
    }
}

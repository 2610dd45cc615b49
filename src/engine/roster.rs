//! Setup-stage editing of words and players.
//!
//! Every operation here fails with [`GameError::InvalidStage`] outside
//! `Setup`, and checks before mutating.
//!
//! Deletion is swap-remove: the last element takes the deleted slot, so
//! the order of the remaining entries is not stable. Player updates are a
//! delete followed by an add, which moves the player to the end of the
//! roster and of the rebuilt routing order.

use crate::core::{GameError, GameResult, Team, TeamPlayer};

use super::game::Game;

impl Game {
    // === Words ===

    /// Add a word to the pool. Case-insensitive duplicates are ignored.
    pub fn add_word(&mut self, word: impl Into<String>) -> GameResult<()> {
        self.ensure_setup("add words")?;
        let word = word.into();
        self.touch();
        if self.find_word(&word).is_none() {
            self.words.push(word);
            self.state.revealed.push(false);
        }
        Ok(())
    }

    /// Remove a word, matched case-insensitively.
    pub fn delete_word(&mut self, word: &str) -> GameResult<()> {
        self.ensure_setup("delete words")?;
        let idx = self.find_word(word).ok_or_else(|| GameError::NotFound {
            kind: "word",
            name: word.to_string(),
        })?;
        self.words.swap_remove(idx);
        self.state.revealed.swap_remove(idx);
        self.touch();
        Ok(())
    }

    // === Players ===

    /// Seat a player. Names are not required to be unique.
    pub fn add_player(&mut self, player: TeamPlayer) -> GameResult<()> {
        self.ensure_setup("add players")?;
        self.touch();
        self.team_players.push(player);
        self.rebuild_routing_order();
        Ok(())
    }

    /// Remove the first player with exactly this name.
    pub fn delete_player(&mut self, name: &str) -> GameResult<()> {
        self.ensure_setup("remove players")?;
        let idx = self.find_player(name).ok_or_else(|| GameError::NotFound {
            kind: "player",
            name: name.to_string(),
        })?;
        self.team_players.swap_remove(idx);
        self.touch();
        self.rebuild_routing_order();
        Ok(())
    }

    /// Re-seat a player under `team`, renamed to `new_name` unless it is
    /// empty. The player moves to the end of the roster.
    pub fn update_player(&mut self, old_name: &str, team: Team, new_name: &str) -> GameResult<()> {
        let name = if new_name.is_empty() { old_name } else { new_name };
        let player = TeamPlayer::new(team, name);
        self.delete_player(old_name)?;
        self.add_player(player)
    }

    /// Move a player to `team`. The player moves to the end of the roster.
    pub fn change_player_team(&mut self, name: &str, team: Team) -> GameResult<()> {
        self.update_player(name, team, "")
    }

    // === Helpers ===

    fn ensure_setup(&self, action: &'static str) -> GameResult<()> {
        if self.stage.is_setup() {
            Ok(())
        } else {
            Err(GameError::InvalidStage {
                action,
                stage: self.stage,
            })
        }
    }

    fn find_word(&self, word: &str) -> Option<usize> {
        let needle = word.to_lowercase();
        self.words.iter().position(|w| w.to_lowercase() == needle)
    }

    fn find_player(&self, name: &str) -> Option<usize> {
        self.team_players.iter().position(|tp| tp.player_name == name)
    }
}

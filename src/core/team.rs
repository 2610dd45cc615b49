//! Teams, seated players and the score table.
//!
//! ## Team
//!
//! Closed variant {Red, Blue, Neutral}. Red and Blue play; Neutral marks
//! ties and unowned board cells. On the wire a team is its lower-case
//! name, and any unrecognized name reads back as Neutral.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One side of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Team {
    Red,
    Blue,
    #[default]
    Neutral,
}

impl Team {
    /// The two teams that take turns, in turn-parity order.
    pub const PLAYING: [Team; 2] = [Team::Red, Team::Blue];

    /// The opposing team. Neutral has no opponent and maps to itself.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
            Team::Neutral => Team::Neutral,
        }
    }

    /// Turn parity: Red takes even slots, Blue odd ones.
    ///
    /// Neutral is treated like Red.
    #[must_use]
    pub const fn parity(self) -> usize {
        match self {
            Team::Blue => 1,
            Team::Red | Team::Neutral => 0,
        }
    }

    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
            Team::Neutral => "neutral",
        }
    }

    /// Parse a wire name. Unknown names are Neutral.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "red" => Team::Red,
            "blue" => Team::Blue,
            _ => Team::Neutral,
        }
    }

    /// `n` copies of this team, used to deal board layouts.
    #[must_use]
    pub fn repeat(self, n: usize) -> Vec<Team> {
        vec![self; n]
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Team {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Team::from_name(&name))
    }
}

/// A seated player and the team they play for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub team: Team,
    pub player_name: String,
}

impl TeamPlayer {
    pub fn new(team: Team, player_name: impl Into<String>) -> Self {
        Self {
            team,
            player_name: player_name.into(),
        }
    }
}

/// One row of the score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPoint {
    pub team: Team,
    pub points: i64,
}

impl TeamPoint {
    #[must_use]
    pub const fn new(team: Team, points: i64) -> Self {
        Self { team, points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_total() {
        assert_eq!(Team::Red.other(), Team::Blue);
        assert_eq!(Team::Blue.other(), Team::Red);
        assert_eq!(Team::Neutral.other(), Team::Neutral);
    }

    #[test]
    fn test_parity() {
        assert_eq!(Team::Red.parity(), 0);
        assert_eq!(Team::Blue.parity(), 1);
        assert_eq!(Team::Neutral.parity(), 0);
    }

    #[test]
    fn test_team_serde() {
        assert_eq!(serde_json::to_string(&Team::Red).unwrap(), "\"red\"");
        assert_eq!(serde_json::to_string(&Team::Blue).unwrap(), "\"blue\"");
        assert_eq!(serde_json::to_string(&Team::Neutral).unwrap(), "\"neutral\"");

        let blue: Team = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(blue, Team::Blue);
    }

    #[test]
    fn test_unknown_team_is_neutral() {
        let team: Team = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(team, Team::Neutral);

        let team: Team = serde_json::from_str("\"RED\"").unwrap();
        assert_eq!(team, Team::Neutral);
    }

    #[test]
    fn test_non_string_team_is_error() {
        assert!(serde_json::from_str::<Team>("1").is_err());
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Team::Blue.repeat(3), vec![Team::Blue, Team::Blue, Team::Blue]);
        assert!(Team::Red.repeat(0).is_empty());
    }

    #[test]
    fn test_team_player_wire_shape() {
        let player = TeamPlayer::new(Team::Red, "alice");
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json, serde_json::json!({"team": "red", "player_name": "alice"}));
    }
}

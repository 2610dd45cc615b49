//! The live game record.
//!
//! ## Game
//!
//! Embeds the [`Snapshot`] and adds everything a running session needs:
//! roster, routing order, score table, stage and timestamps. The record
//! serializes to the wire shape callers persist and broadcast, with the
//! snapshot and options flattened into the top level.
//!
//! Two RNG streams are derived from the snapshot seed:
//!
//! - **permutation stream**, seeded by `seed`: picks the game's words, so
//!   every game in a lineage reads the same permutation
//! - **choice stream**, seeded by `seed * (perm_index + 1)`: starting team
//!   and word draws, so games in a lineage differ
//!
//! The choice stream is kept in the record and resumes on deserialization.
//! A record stored without it reseeds the stream on first use.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use time::OffsetDateTime;
use tracing::debug;

use crate::core::{
    GameOptions, GameRng, Snapshot, Stage, Team, TeamPlayer, TeamPoint, WORDS_PER_GAME,
};

/// A single game session.
///
/// Not safe for concurrent mutation; callers serialize access per game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    #[serde(flatten)]
    pub(crate) state: Snapshot,

    pub(crate) id: String,

    #[serde(with = "time::serde::rfc3339")]
    pub(crate) created_at: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub(crate) updated_at: OffsetDateTime,

    pub(crate) starting_team: Team,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) winning_team: Option<Team>,

    pub(crate) words: Vec<String>,

    /// Board-reveal variant only; empty otherwise.
    #[serde(default)]
    pub(crate) layout: Vec<Team>,

    #[serde(with = "time::serde::rfc3339")]
    pub(crate) round_started_at: OffsetDateTime,

    #[serde(flatten)]
    pub(crate) options: GameOptions,

    #[serde(default)]
    pub(crate) team_players: Vec<TeamPlayer>,

    pub(crate) stage: Stage,

    pub(crate) team_points: SmallVec<[TeamPoint; 2]>,

    /// Index into `routing_order`.
    pub(crate) current_player: usize,

    pub(crate) routing_order: Vec<TeamPlayer>,

    pub(crate) current_word: String,

    /// Choice stream; `None` only for records read without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) rng: Option<GameRng>,
}

impl Game {
    /// Build a live game from a snapshot.
    ///
    /// # Panics
    ///
    /// With `random_words` set, panics if the word set is shorter than
    /// `perm_index + WORDS_PER_GAME`. [`Snapshot::advance`] keeps lineages
    /// inside that bound.
    pub fn new(id: impl Into<String>, snapshot: Snapshot, options: GameOptions) -> Self {
        let now = OffsetDateTime::now_utc();
        let mut perm_rng = GameRng::new(snapshot.seed);
        let mut rng = GameRng::new(choice_seed(&snapshot));

        let starting_team = Team::PLAYING[rng.gen_range_usize(0..Team::PLAYING.len())];

        let mut game = Self {
            state: snapshot,
            id: id.into(),
            created_at: now,
            updated_at: now,
            starting_team,
            winning_team: None,
            words: Vec::new(),
            layout: Vec::new(),
            round_started_at: now,
            options,
            team_players: Vec::new(),
            stage: Stage::Setup,
            team_points: smallvec![
                TeamPoint::new(starting_team, 0),
                TeamPoint::new(starting_team.other(), 0),
            ],
            current_player: 0,
            routing_order: Vec::new(),
            current_word: String::new(),
            rng: Some(rng),
        };

        if game.options.random_words {
            let perm = perm_rng.permutation(game.state.word_set.len());
            let start = game.state.perm_index;
            game.words = perm[start..start + WORDS_PER_GAME]
                .iter()
                .map(|&i| game.state.word_set[i].clone())
                .collect();

            // A restored snapshot carries this game's reveal progress.
            if game.state.revealed.len() != game.words.len() {
                game.state.revealed = vec![false; game.words.len()];
            }
        } else {
            game.state.revealed.clear();
        }

        debug!(
            game_id = %game.id,
            seed = game.state.seed,
            perm_index = game.state.perm_index,
            starting_team = %game.starting_team,
            words = game.words.len(),
            "game created"
        );

        game
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> OffsetDateTime {
        self.updated_at
    }

    #[must_use]
    pub fn round_started_at(&self) -> OffsetDateTime {
        self.round_started_at
    }

    #[must_use]
    pub fn starting_team(&self) -> Team {
        self.starting_team
    }

    #[must_use]
    pub fn winning_team(&self) -> Option<Team> {
        self.winning_team
    }

    /// The words in play, parallel to [`Game::revealed`].
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn revealed(&self) -> &[bool] {
        &self.state.revealed
    }

    #[must_use]
    pub fn layout(&self) -> &[Team] {
        &self.layout
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Seated players in join order.
    #[must_use]
    pub fn team_players(&self) -> &[TeamPlayer] {
        &self.team_players
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn team_points(&self) -> &[TeamPoint] {
        &self.team_points
    }

    /// Points for one team; zero for teams without a row.
    #[must_use]
    pub fn points(&self, team: Team) -> i64 {
        self.team_points
            .iter()
            .find(|tp| tp.team == team)
            .map_or(0, |tp| tp.points)
    }

    #[must_use]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    #[must_use]
    pub fn routing_order(&self) -> &[TeamPlayer] {
        &self.routing_order
    }

    /// The word up for guessing; empty when none is active.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    // === Snapshots ===

    /// An owned copy of the restart-durable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    /// Change-detection token: `updated_at` in nanoseconds, zero-padded to
    /// 19 digits.
    #[must_use]
    pub fn state_id(&self) -> String {
        format!("{:019}", self.updated_at.unix_timestamp_nanos())
    }

    // === Turns ===

    /// The acting team: the starting team on even rounds, the other team on
    /// odd ones.
    #[must_use]
    pub fn current_team(&self) -> Team {
        if self.state.round % 2 == 0 {
            self.starting_team
        } else {
            self.starting_team.other()
        }
    }

    /// End the current turn.
    ///
    /// Returns `false` without changing anything once a winner is set.
    pub fn next_turn(&mut self) -> bool {
        if self.winning_team.is_some() {
            return false;
        }
        self.touch();
        self.state.round += 1;
        self.next_player();
        self.next_word(false);
        self.round_started_at = OffsetDateTime::now_utc();
        true
    }

    /// A uniformly chosen playing team from the choice stream.
    pub fn random_team(&mut self) -> Team {
        Team::PLAYING[self.choice_rng().gen_range_usize(0..Team::PLAYING.len())]
    }

    pub(crate) fn choice_rng(&mut self) -> &mut GameRng {
        let state = &self.state;
        self.rng.get_or_insert_with(|| GameRng::new(choice_seed(state)))
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}

fn choice_seed(snapshot: &Snapshot) -> i64 {
    snapshot
        .seed
        .wrapping_mul((snapshot.perm_index as i64).wrapping_add(1))
}

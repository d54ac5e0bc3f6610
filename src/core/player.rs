//! Players and per-player status.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 seats.
//!
//! ## Player
//!
//! Display name, score and the player's own name → zone mapping.
//!
//! ## GameStatus
//!
//! A side table a game driver can use to track per-player totals, plus a
//! designated "win decider" seat.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::entity::ZoneId;

/// Player identifier supporting up to 255 seats.
///
/// Player indices are 0-based: the first player created is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use card_table::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: i64,
    zones: FxHashMap<String, ZoneId>,
}

impl Player {
    /// Create a player. Without a name, the player is called `Player <id>`.
    #[must_use]
    pub fn new(id: PlayerId, name: Option<&str>) -> Self {
        Self {
            id,
            name: name.map_or_else(|| id.to_string(), str::to_owned),
            score: 0,
            zones: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    pub fn adjust_score(&mut self, delta: i64) {
        self.score += delta;
    }

    /// Zone this player owns under `name`.
    #[must_use]
    pub fn zone(&self, name: &str) -> Option<ZoneId> {
        self.zones.get(name).copied()
    }

    /// Iterate over (name, zone) pairs in unspecified order.
    pub fn zones(&self) -> impl Iterator<Item = (&str, ZoneId)> {
        self.zones.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// Register an owned zone. Returns false if the name is already taken.
    pub(crate) fn register_zone(&mut self, name: &str, zone: ZoneId) -> bool {
        if self.zones.contains_key(name) {
            return false;
        }
        self.zones.insert(name.to_owned(), zone);
        true
    }
}

/// Label produced by [`GameStatus::game_winner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameWinner {
    PlayerOne,
    PlayerTwo,
    Tie,
}

impl std::fmt::Display for GameWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameWinner::PlayerOne => write!(f, "Player 1"),
            GameWinner::PlayerTwo => write!(f, "Player 2"),
            GameWinner::Tie => write!(f, "Tie"),
        }
    }
}

/// Per-player status values plus a designated win-decider seat.
///
/// Not a scoring algorithm: drivers write whatever totals they track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    statuses: FxHashMap<PlayerId, i64>,
    win_decider: Option<PlayerId>,
}

impl GameStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a player at 0.
    pub fn create_status(&mut self, player: PlayerId) {
        self.statuses.insert(player, 0);
    }

    /// Status value for a player, `None` if the player is not tracked.
    #[must_use]
    pub fn status(&self, player: PlayerId) -> Option<i64> {
        self.statuses.get(&player).copied()
    }

    pub fn set_status(&mut self, player: PlayerId, value: i64) {
        self.statuses.insert(player, value);
    }

    #[must_use]
    pub fn win_decider(&self) -> Option<PlayerId> {
        self.win_decider
    }

    pub fn set_win_decider(&mut self, player: PlayerId) {
        self.win_decider = Some(player);
    }

    /// Three-way comparison of two scores.
    ///
    /// Only the supplied scores are consulted; mapping the label back to a
    /// seat is the caller's job.
    #[must_use]
    pub fn game_winner(score_one: i64, score_two: i64) -> GameWinner {
        match score_one.cmp(&score_two) {
            std::cmp::Ordering::Greater => GameWinner::PlayerOne,
            std::cmp::Ordering::Less => GameWinner::PlayerTwo,
            std::cmp::Ordering::Equal => GameWinner::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::new(PlayerId::new(2), None);

        assert_eq!(player.id(), PlayerId::new(2));
        assert_eq!(player.name(), "Player 2");
        assert_eq!(player.score(), 0);
        assert_eq!(player.zones().count(), 0);
    }

    #[test]
    fn test_player_score() {
        let mut player = Player::new(PlayerId::new(0), Some("Alice"));
        assert_eq!(player.name(), "Alice");

        player.set_score(5);
        player.adjust_score(-2);
        assert_eq!(player.score(), 3);
    }

    #[test]
    fn test_player_zone_names_unique() {
        let mut player = Player::new(PlayerId::new(0), None);

        assert!(player.register_zone("hand", ZoneId::new(0)));
        assert!(!player.register_zone("hand", ZoneId::new(1)));
        assert!(player.register_zone("books", ZoneId::new(2)));

        assert_eq!(player.zone("hand"), Some(ZoneId::new(0)));
        assert_eq!(player.zone("books"), Some(ZoneId::new(2)));
        assert_eq!(player.zone("missing"), None);
    }

    #[test]
    fn test_game_status_accessors() {
        let mut status = GameStatus::new();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(status.status(p0), None);

        status.create_status(p0);
        assert_eq!(status.status(p0), Some(0));

        status.set_status(p1, 26);
        assert_eq!(status.status(p1), Some(26));

        assert_eq!(status.win_decider(), None);
        status.set_win_decider(p0);
        assert_eq!(status.win_decider(), Some(p0));
    }

    #[test]
    fn test_game_winner() {
        assert_eq!(GameStatus::game_winner(30, 22), GameWinner::PlayerOne);
        assert_eq!(GameStatus::game_winner(10, 42), GameWinner::PlayerTwo);
        assert_eq!(GameStatus::game_winner(26, 26), GameWinner::Tie);

        assert_eq!(GameWinner::PlayerOne.to_string(), "Player 1");
        assert_eq!(GameWinner::PlayerTwo.to_string(), "Player 2");
        assert_eq!(GameWinner::Tie.to_string(), "Tie");
    }
}

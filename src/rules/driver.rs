//! Game driver trait for games played on a table.
//!
//! Games implement `GameDriver` to define:
//! - How the table is set up
//! - What one round does
//! - When the game is over and who won
//!
//! A driver only talks to the table through `EngineOperations`; it never
//! owns the table, so the host decides when (and whether) the next round
//! is scheduled.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::engine::EngineOperations;
use crate::error::{EngineError, Result};

/// Lifecycle of a game. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winner, unless the game was drawn.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// A turn/round driver for one game.
///
/// ## Implementation Notes
///
/// - `setup` moves the game from `NotStarted` to `InProgress`
/// - `play_round` fails with `NotInProgress` outside `InProgress`
/// - once `phase` is `Finished`, `result` must be `Some`
pub trait GameDriver {
    /// What a single round reports back to the host.
    type Round;

    /// Build the game's players, zones and cards on the table.
    fn setup<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<()>;

    /// Play one round.
    fn play_round<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<Self::Round>;

    fn phase(&self) -> GamePhase;

    /// The outcome, once the game is `Finished`.
    fn result(&self) -> Option<&GameResult>;

    fn rounds_played(&self) -> u32;

    // === Convenience Methods ===

    fn is_finished(&self) -> bool {
        self.phase() == GamePhase::Finished
    }

    /// Set up if needed, then play rounds until the game finishes.
    ///
    /// The engine's event log is left alone: every event of the game is
    /// still pending afterwards. A host that renders round by round should
    /// call `play_round` itself and drain between rounds.
    fn play_to_completion<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<GameResult> {
        if self.phase() == GamePhase::NotStarted {
            self.setup(engine)?;
        }
        while self.phase() == GamePhase::InProgress {
            self.play_round(engine)?;
        }
        self.result().cloned().ok_or(EngineError::NotInProgress)
    }
}

/// Seating order and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    seats: Vec<PlayerId>,
    current: usize,
    turn_number: u32,
}

impl TurnOrder {
    /// Seat players in the given order. The first seat moves first.
    ///
    /// Panics if no players are given.
    pub fn new(seats: impl IntoIterator<Item = PlayerId>) -> Self {
        let seats: Vec<_> = seats.into_iter().collect();
        assert!(!seats.is_empty(), "Must have at least 1 player");
        Self {
            seats,
            current: 0,
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.seats[self.current]
    }

    /// 1-based turn counter.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Pass the turn to the next seat.
    pub fn advance(&mut self) -> PlayerId {
        self.current = (self.current + 1) % self.seats.len();
        self.turn_number += 1;
        self.current()
    }

    /// Everyone except `player`, starting from the seat after them.
    pub fn others(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        let start = self
            .seats
            .iter()
            .position(|&p| p == player)
            .map_or(0, |i| i + 1);
        let n = self.seats.len();
        (0..n)
            .map(move |k| self.seats[(start + k) % n])
            .filter(move |&p| p != player)
    }
}

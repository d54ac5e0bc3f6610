//! # card-table
//!
//! An in-memory card table: players, zones, decks and playing cards, plus
//! the operations games are built from (create, move, shuffle, compare,
//! deal, query).
//!
//! ## Design Principles
//!
//! 1. **One Capability Set**: Games are written against `EngineOperations`
//!    and never reach into the table's internals.
//!
//! 2. **True Moves**: A card has one identity for the whole session and is
//!    in at most one zone or deck at a time. Moving it relocates its id.
//!
//! 3. **Configuration Over Convention**: Rank values (ace high or low),
//!    zone capacity, face policy and tie policies are configured, never
//!    hardcoded.
//!
//! 4. **Explicit Sessions**: A `Table` is built, owned and passed around by
//!    the caller. A new game is a new table.
//!
//! ## Architecture
//!
//! - **Recoverable Failures**: Lookups return `Option`, mutations return
//!   `Result`. A rejected mutation leaves the table untouched.
//!
//! - **Deterministic Randomness**: Every shuffle and coin flip comes from
//!   the table's seeded `GameRng`.
//!
//! - **Notifications, Not Rendering**: Mutations append `TableEvent`s;
//!   presentation layers drain them and render a `TableSnapshot`.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, RNG, configuration
//! - `cards`: Cards, suits, ranks and decks
//! - `zones`: Zones on the table
//! - `engine`: `EngineOperations`, `Table`, events and snapshots
//! - `rules`: `GameDriver` trait, game phases, turn order
//! - `games`: War and Go Fish
//! - `error`: `EngineError`

pub mod core;
pub mod cards;
pub mod zones;
pub mod engine;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardLocation, DeckId, ZoneId,
    PlayerId, Player, GameStatus, GameWinner,
    GameRng, GameRngState,
    AceRank, RankValues, FacePolicy, Geometry, Board, ZoneConfig,
};

pub use crate::cards::{compare_cards, Card, Deck, Rank, Suit};

pub use crate::zones::Zone;

pub use crate::engine::{EngineOperations, Table, TableEvent, TableSnapshot};

pub use crate::rules::{GameDriver, GamePhase, GameResult, TurnOrder};

pub use crate::games::go_fish::{GoFishConfig, GoFishGame};
pub use crate::games::war::{TiePolicy, WarConfig, WarGame};

pub use crate::error::{EngineError, Result};

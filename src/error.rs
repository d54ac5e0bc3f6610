//! Error types for table operations.
//!
//! Every error here is recoverable: a rejected mutation leaves the table
//! unchanged and the caller decides what to do next.

use thiserror::Error;

use crate::core::{CardId, DeckId, PlayerId, ZoneId};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("card not found: {0}")]
    UnknownCard(CardId),

    #[error("zone not found: {0}")]
    UnknownZone(ZoneId),

    #[error("deck not found: {0}")]
    UnknownDeck(DeckId),

    #[error("player not found: {0}")]
    UnknownPlayer(PlayerId),

    #[error("cannot add card to {name}: zone is full ({capacity} cards)")]
    ZoneFull { name: String, capacity: usize },

    #[error("no cards in {0}")]
    EmptyZone(ZoneId),

    #[error("{card} is not in {zone}")]
    CardNotInZone { card: CardId, zone: ZoneId },

    #[error("{0} is already in play; move it from its current zone")]
    CardInPlay(CardId),

    #[error("no board created; create a board before placing zone {0:?}")]
    NoBoard(String),

    #[error("{owner} already has a zone named {name:?}")]
    DuplicateZone { owner: String, name: String },

    #[error("{0} already exists")]
    DeckExists(DeckId),

    #[error("table already holds {0} zones")]
    TooManyZones(usize),

    #[error("game is not in progress")]
    NotInProgress,

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

//! Entity identification.
//!
//! Every object the table creates gets a typed identifier:
//!
//! - `CardId`: one per physical card, monotonic per table
//! - `ZoneId`: one per zone, monotonic per table
//! - `PlayerId`: one per seat, monotonic per table starting at 0
//! - `DeckId`: derived from the owner, so each owner has at most one deck
//!
//! Ids are never reused within a session. A new session is a new `Table`,
//! which restarts every counter.
//!
//! ```
//! use card_table::core::{DeckId, PlayerId};
//!
//! let deck = DeckId::owned_by(Some(PlayerId::new(3)));
//! assert_eq!(deck.to_string(), "deck-3");
//! assert_eq!(DeckId::owned_by(None).to_string(), "deck-shared");
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for a zone.
///
/// Zone *names* are only unique per owner; the id is unique per table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// Create a zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// Deck identifier, derived from the deck's owner.
///
/// `None` is the shared (ownerless) deck. Because the id is a pure function
/// of the owner, an owner can hold at most one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(pub Option<PlayerId>);

impl DeckId {
    /// Deck id for the given owner.
    #[must_use]
    pub const fn owned_by(owner: Option<PlayerId>) -> Self {
        Self(owner)
    }

    /// The owner this id was derived from.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(owner) => write!(f, "deck-{}", owner.0),
            None => write!(f, "deck-shared"),
        }
    }
}

/// Where a card currently lives.
///
/// Cards that are in neither a zone nor a deck are out of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    /// In a zone on the table.
    Zone(ZoneId),
    /// In a detached deck.
    Deck(DeckId),
}

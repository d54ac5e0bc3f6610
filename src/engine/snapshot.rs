//! Read-only table views for presentation layers.
//!
//! A renderer never touches live state. It takes a `TableSnapshot`, draws
//! it, and asks for a new one after draining the table's events. Face-down
//! cards are captured without their suit, rank or value.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::core::{Board, CardId, DeckId, FacePolicy, Geometry, PlayerId, ZoneId};
use crate::error::Result;

use super::ops::EngineOperations;
use super::table::Table;

/// The visible side of a face-up card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub suit: Suit,
    pub rank: Rank,
    pub value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face_up: bool,
    /// `None` while the card is face down.
    pub face: Option<CardFace>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneView {
    pub id: ZoneId,
    pub name: String,
    pub owner: Option<PlayerId>,
    pub face: FacePolicy,
    pub geometry: Option<Geometry>,
    /// Bottom first.
    pub cards: Vec<CardView>,
}

/// Decks are never shown, only counted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    pub id: DeckId,
    pub size: usize,
}

/// Everything a renderer needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub board: Option<Board>,
    pub players: Vec<PlayerView>,
    pub zones: Vec<ZoneView>,
    pub decks: Vec<DeckView>,
}

impl TableSnapshot {
    pub(crate) fn capture(table: &Table) -> Self {
        let card_view = |id: CardId| {
            let card = table.card(id);
            let face_up = card.is_some_and(|c| c.is_face_up());
            CardView {
                id,
                face_up,
                face: card.filter(|c| c.is_face_up()).map(|c| CardFace {
                    suit: c.suit(),
                    rank: c.rank(),
                    value: c.value(),
                }),
            }
        };

        Self {
            board: table.board(),
            players: table
                .players()
                .iter()
                .map(|p| PlayerView {
                    id: p.id(),
                    name: p.name().to_owned(),
                    score: p.score(),
                })
                .collect(),
            zones: table
                .zones()
                .iter()
                .map(|z| ZoneView {
                    id: z.id(),
                    name: z.name().to_owned(),
                    owner: z.owner(),
                    face: z.face_policy(),
                    geometry: z.geometry(),
                    cards: z.cards().iter().copied().map(card_view).collect(),
                })
                .collect(),
            decks: table
                .decks()
                .iter()
                .map(|d| DeckView {
                    id: d.id(),
                    size: d.len(),
                })
                .collect(),
        }
    }

    /// Zone view by name and owner.
    #[must_use]
    pub fn zone(&self, name: &str, owner: Option<PlayerId>) -> Option<&ZoneView> {
        self.zones
            .iter()
            .find(|z| z.name == name && z.owner == owner)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

//! State-change notifications.
//!
//! Every successful mutation of a `Table` appends one `TableEvent` to its
//! event log. A presentation layer drains the log and re-renders from a
//! `TableSnapshot`; the table never calls into presentation code.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, CardLocation, DeckId, PlayerId, ZoneId};

/// Something that changed on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    BoardCreated { width: u32, height: u32 },
    PlayerCreated { player: PlayerId },
    ZoneCreated { zone: ZoneId, owner: Option<PlayerId> },
    CardCreated { card: CardId },
    DeckCreated { deck: DeckId, size: usize },

    /// A card changed location. `None` means out of play.
    CardMoved {
        card: CardId,
        from: Option<CardLocation>,
        to: Option<CardLocation>,
        face_up: bool,
    },

    CardFlipped { card: CardId, face_up: bool },
    ZoneShuffled { zone: ZoneId },
    DeckShuffled { deck: DeckId },
    ScoreChanged { player: PlayerId, score: i64 },
}

impl TableEvent {
    /// The card this event is about, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            TableEvent::CardCreated { card }
            | TableEvent::CardMoved { card, .. }
            | TableEvent::CardFlipped { card, .. } => Some(*card),
            _ => None,
        }
    }
}

//! A zone: a named, ordered pile of cards on the table.
//!
//! Index 0 is the bottom; the last element is the top, so the most recently
//! pushed card is the first one popped or peeked.
//!
//! Zones only hold card ids. Which zone a card is in is tracked by the
//! table, which is the only thing allowed to push or remove ids, so a card
//! can never be in two zones at once.

use serde::{Deserialize, Serialize};

use crate::core::config::{FacePolicy, Geometry, ZoneConfig};
use crate::core::entity::{CardId, ZoneId};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    id: ZoneId,
    name: String,
    owner: Option<PlayerId>,
    cards: Vec<CardId>,
    max_cards: Option<usize>,
    face: FacePolicy,
    geometry: Option<Geometry>,
}

impl Zone {
    pub(crate) fn new(id: ZoneId, config: ZoneConfig) -> Self {
        Self {
            id,
            name: config.name,
            owner: config.owner,
            cards: Vec::new(),
            max_cards: config.max_cards,
            face: config.face,
            geometry: config.geometry,
        }
    }

    #[must_use]
    pub fn id(&self) -> ZoneId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning player; `None` for shared zones.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn max_cards(&self) -> Option<usize> {
        self.max_cards
    }

    #[must_use]
    pub fn face_policy(&self) -> FacePolicy {
        self.face
    }

    #[must_use]
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Card ids, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when another card would exceed the capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_cards.is_some_and(|max| self.cards.len() >= max)
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// The top (most recently pushed) card.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    pub(crate) fn push(&mut self, card: CardId) {
        self.cards.push(card);
    }

    pub(crate) fn remove(&mut self, card: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub(crate) fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

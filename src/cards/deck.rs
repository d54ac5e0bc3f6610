//! Decks: detached, ordered card sequences.
//!
//! A `Deck` is a zone that is not on the board. It holds its own ordered
//! copy of card ids; the last id is the top card. Cards reach the board by
//! being dealt from the top.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, DeckId};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// An ordered pile of cards owned by a player (or shared).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    id: DeckId,
    cards: Vec<CardId>,
}

impl Deck {
    /// Create a deck for `owner` holding a copy of `cards` (bottom first).
    #[must_use]
    pub fn new(owner: Option<PlayerId>, cards: &[CardId]) -> Self {
        Self {
            id: DeckId::owned_by(owner),
            cards: cards.to_vec(),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.id.owner()
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

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Put a card on top.
    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Remove a card by id. Removing an absent card is a no-op.
    ///
    /// Returns true if the card was present.
    pub fn remove(&mut self, card: CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|&c| c != card);
        self.cards.len() != before
    }

    /// Take up to `count` cards off the top, top card first.
    pub fn deal(&mut self, count: usize) -> Vec<CardId> {
        let split = self.cards.len().saturating_sub(count);
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        dealt
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

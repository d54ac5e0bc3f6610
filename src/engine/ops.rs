//! The engine capability set.
//!
//! `EngineOperations` is the one interface game drivers are written
//! against: factories, queries, mutations, shuffles and comparisons. Games
//! never reach into a concrete table, so any implementation (the in-memory
//! `Table`, a recording wrapper, a networked proxy) can drive any game.
//!
//! ## Failure model
//!
//! - Lookups return `Option`; `None` means "no such entity".
//! - Mutations return `Result`; an `Err` leaves state untouched and is
//!   always recoverable.
//!
//! Only the primitives must be implemented. The provided methods
//! (`build_standard_deck`, `deal_round_robin`, `move_all`, ...) are
//! compositions of them.

use std::cmp::Ordering;

use log::warn;

use crate::cards::{compare_cards, Card, Deck, Rank, Suit};
use crate::core::{
    CardId, CardLocation, DeckId, GameRng, Player, PlayerId, RankValues, ZoneConfig, ZoneId,
};
use crate::error::{EngineError, Result};
use crate::zones::Zone;

/// Factory, query and mutation operations over a card table.
pub trait EngineOperations {
    // === Factories ===

    /// Create (or replace) the board zones with a layout are placed on.
    fn create_board(&mut self, width: u32, height: u32);

    /// Allocate the next player id and seat a new player.
    ///
    /// Without a name the player is called `Player <id>`.
    ///
    /// # Panics
    ///
    /// Player ids are `u8`; seating a 256th player panics.
    fn create_player(&mut self, name: Option<&str>) -> PlayerId;

    /// Create a zone, registering it with its owner if it has one.
    ///
    /// Fails if the owner is unknown, the owner already has a zone with the
    /// same name, or the zone has a layout but no board exists.
    fn create_zone(&mut self, config: ZoneConfig) -> Result<ZoneId>;

    /// Allocate the next card id. The card starts face down and out of play.
    fn create_card(&mut self, suit: Suit, rank: Rank, values: &RankValues) -> CardId;

    /// Create the owner's deck holding a copy of `cards` (bottom first).
    ///
    /// Every card must be out of play. The deck id is derived from the
    /// owner, so each owner has at most one deck.
    fn create_deck(&mut self, owner: Option<PlayerId>, cards: &[CardId]) -> Result<DeckId>;

    // === Queries ===

    fn player(&self, id: PlayerId) -> Option<&Player>;

    /// All players in creation order.
    fn players(&self) -> &[Player];

    fn card(&self, id: CardId) -> Option<&Card>;

    fn zone(&self, id: ZoneId) -> Option<&Zone>;

    fn deck(&self, id: DeckId) -> Option<&Deck>;

    /// First zone (in creation order) owned by `owner`.
    fn zone_id(&self, owner: PlayerId) -> Option<ZoneId>;

    /// The deck owned by `owner`, if one was created.
    fn deck_id(&self, owner: PlayerId) -> Option<DeckId>;

    /// Zone with the given name and owner.
    fn find_zone(&self, name: &str, owner: Option<PlayerId>) -> Option<ZoneId>;

    /// Where a card currently is. `None` for unknown or out-of-play cards.
    fn card_location(&self, card: CardId) -> Option<CardLocation>;

    /// Number of cards in a zone. Unknown zones hold 0 cards.
    fn card_amount_in_zone(&self, zone: ZoneId) -> usize {
        self.zone(zone).map_or(0, Zone::len)
    }

    /// Number of cards in a deck. Unknown decks hold 0 cards.
    fn deck_size(&self, deck: DeckId) -> usize {
        self.deck(deck).map_or(0, Deck::len)
    }

    /// Card ids in a zone, bottom first. Empty for unknown zones.
    fn zone_cards(&self, zone: ZoneId) -> &[CardId] {
        self.zone(zone).map_or(&[][..], Zone::cards)
    }

    /// The top (most recently pushed) card of a zone.
    fn top_card(&self, zone: ZoneId) -> Option<CardId> {
        self.zone(zone)?.top()
    }

    /// A player's own zone called `name`.
    fn player_zone(&self, player: PlayerId, name: &str) -> Option<ZoneId> {
        self.player(player)?.zone(name)
    }

    fn card_value(&self, card: CardId) -> Option<i32> {
        self.card(card).map(Card::value)
    }

    /// Compare two cards by value. `None` if either id is unknown.
    fn compare_card_ids(&self, a: CardId, b: CardId) -> Option<Ordering> {
        Some(compare_cards(self.card(a)?, self.card(b)?))
    }

    // === Mutations ===

    /// Relocate `card` from `from` to `to`, setting its orientation.
    ///
    /// - `from = None`: the card must currently be out of play.
    /// - `from = Some(z)`: the card must currently be in `z`.
    /// - `to = None`: the card leaves play.
    /// - `to = Some(z)`: the card is pushed on top of `z`.
    ///
    /// The card keeps its identity; nothing is copied.
    fn move_card_to_zone(
        &mut self,
        card: CardId,
        from: Option<ZoneId>,
        to: Option<ZoneId>,
        face_up: bool,
    ) -> Result<()>;

    /// Pop the top card of `from` onto `to`, applying `to`'s face policy.
    fn move_top_card(&mut self, from: ZoneId, to: ZoneId) -> Result<CardId>;

    /// Put an out-of-play card into a zone under the zone's face policy.
    fn place_card(&mut self, card: CardId, zone: ZoneId) -> Result<()>;

    /// Put an out-of-play card on top of a deck.
    fn add_card(&mut self, deck: DeckId, card: CardId) -> Result<()>;

    /// Take a card out of a deck (out of play).
    ///
    /// Removing a card the deck does not hold is a silent no-op returning
    /// `Ok(false)`.
    fn remove_card(&mut self, deck: DeckId, card: CardId) -> Result<bool>;

    /// Deal up to `count` cards from the top of `deck` onto `zone`.
    ///
    /// Returns how many cards moved. All-or-nothing with respect to the
    /// zone's capacity.
    fn deal_from_deck(&mut self, deck: DeckId, zone: ZoneId, count: usize) -> Result<usize>;

    fn shuffle_deck(&mut self, deck: DeckId) -> Result<()>;

    fn shuffle_zone(&mut self, zone: ZoneId) -> Result<()>;

    /// Toggle a card's orientation. Returns the new face-up flag.
    fn flip_card(&mut self, card: CardId) -> Result<bool>;

    fn set_score(&mut self, player: PlayerId, score: i64) -> Result<()>;

    /// Add `delta` to a player's score. Returns the new score.
    fn adjust_score(&mut self, player: PlayerId, delta: i64) -> Result<i64>;

    /// The table's random stream, for game-level random choices.
    fn rng(&mut self) -> &mut GameRng;

    // === Compositions ===

    /// Create the 52 cards of a standard deck (suit by suit, ace to king)
    /// and register them as `owner`'s deck.
    fn build_standard_deck(
        &mut self,
        owner: Option<PlayerId>,
        values: &RankValues,
    ) -> Result<DeckId> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(self.create_card(suit, rank, values));
            }
        }
        self.create_deck(owner, &cards)
    }

    /// Deal `per_zone` cards to each zone in turn, one card at a time.
    ///
    /// Stops early when the deck runs out. Returns how many cards moved.
    /// Every zone is checked for room up front, so a capacity failure
    /// deals nothing.
    fn deal_round_robin(&mut self, deck: DeckId, zones: &[ZoneId], per_zone: usize) -> Result<usize> {
        if self.deck(deck).is_none() {
            return Err(rejected(EngineError::UnknownDeck(deck)));
        }
        if zones.is_empty() {
            return Ok(0);
        }

        let n = zones.len();
        let total = per_zone.saturating_mul(n).min(self.deck_size(deck));

        // A zone listed twice takes both shares
        let mut shares: Vec<(ZoneId, usize)> = Vec::with_capacity(n);
        for (i, &zone) in zones.iter().enumerate() {
            let share = total / n + usize::from(i < total % n);
            match shares.iter_mut().find(|(z, _)| *z == zone) {
                Some((_, owed)) => *owed += share,
                None => shares.push((zone, share)),
            }
        }
        for &(zone, share) in &shares {
            check_room(&*self, zone, share)?;
        }

        for i in 0..total {
            self.deal_from_deck(deck, zones[i % n], 1)?;
        }
        Ok(total)
    }

    /// Move every card of `from` onto `to`, top card first.
    ///
    /// Returns how many cards moved. `to` must have room for all of them
    /// or nothing moves. Moving a zone onto itself moves nothing.
    fn move_all(&mut self, from: ZoneId, to: ZoneId) -> Result<usize> {
        if self.zone(from).is_none() {
            return Err(rejected(EngineError::UnknownZone(from)));
        }
        if from == to {
            return Ok(0);
        }

        let count = self.card_amount_in_zone(from);
        check_room(&*self, to, count)?;
        for _ in 0..count {
            self.move_top_card(from, to)?;
        }
        Ok(count)
    }
}

fn rejected(err: EngineError) -> EngineError {
    warn!("{err}");
    err
}

/// Fail unless `zone` exists and can take `incoming` more cards.
fn check_room<E: EngineOperations + ?Sized>(engine: &E, zone: ZoneId, incoming: usize) -> Result<()> {
    let Some(z) = engine.zone(zone) else {
        return Err(rejected(EngineError::UnknownZone(zone)));
    };
    match z.max_cards() {
        Some(capacity) if z.len() + incoming > capacity => Err(rejected(EngineError::ZoneFull {
            name: z.name().to_owned(),
            capacity,
        })),
        _ => Ok(()),
    }
}

//! The table: one game session's worth of players, zones, decks and cards.
//!
//! A `Table` is constructed explicitly and passed by reference to whatever
//! drives it. Starting a new game means building a new `Table`; nothing is
//! ever reset in place, so ids and back-references never go stale.
//!
//! ## Card locations
//!
//! Every card lives in the table's registry for the whole session. Its
//! location is tracked separately (zone, deck, or out of play), in the same
//! way a zone manager tracks entity locations. Moving a card relocates its
//! id and updates its face-up flag in place; the card record is never
//! copied.
//!
//! ## Usage
//!
//! ```
//! use card_table::engine::{EngineOperations, Table};
//! use card_table::core::{RankValues, ZoneConfig};
//!
//! let mut table = Table::new(42);
//! let alice = table.create_player(Some("Alice"));
//! let hand = table.create_zone(ZoneConfig::new("hand").with_owner(alice).face_up())?;
//!
//! let deck = table.build_standard_deck(None, &RankValues::default())?;
//! table.shuffle_deck(deck)?;
//! table.deal_from_deck(deck, hand, 5)?;
//!
//! assert_eq!(table.card_amount_in_zone(hand), 5);
//! assert_eq!(table.deck_size(deck), 47);
//! # Ok::<(), card_table::error::EngineError>(())
//! ```

use im::Vector;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::cards::{Card, Deck, Rank, Suit};
use crate::core::{
    Board, CardId, CardLocation, DeckId, GameRng, GameRngState, Player, PlayerId, RankValues,
    ZoneConfig, ZoneId,
};
use crate::error::{EngineError, Result};
use crate::zones::Zone;

use super::event::TableEvent;
use super::ops::EngineOperations;
use super::snapshot::TableSnapshot;

/// A single game session.
#[derive(Clone, Debug)]
pub struct Table {
    board: Option<Board>,
    players: Vec<Player>,
    zones: Vec<Zone>,
    /// Card registry, indexed by `CardId`.
    cards: Vec<Card>,
    decks: Vec<Deck>,
    /// Card id -> current location. Absent means out of play.
    locations: FxHashMap<CardId, CardLocation>,
    events: Vector<TableEvent>,
    rng: GameRng,
}

impl Table {
    /// Create an empty table with no board.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            board: None,
            players: Vec::new(),
            zones: Vec::new(),
            cards: Vec::new(),
            decks: Vec::new(),
            locations: FxHashMap::default(),
            events: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Create a table with a board already in place.
    #[must_use]
    pub fn with_board(seed: u64, width: u32, height: u32) -> Self {
        let mut table = Self::new(seed);
        table.create_board(width, height);
        table
    }

    #[must_use]
    pub fn board(&self) -> Option<Board> {
        self.board
    }

    /// All zones in creation order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// All decks in creation order.
    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// All cards ever created, in id order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Pending state-change notifications, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<TableEvent> {
        &self.events
    }

    /// Take every pending notification, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }

    /// Read-only view of the current table for a presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }

    /// Checkpoint the random stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume the random stream from a checkpoint.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    fn record(&mut self, event: TableEvent) {
        self.events.push_back(event);
    }

    fn reject(err: EngineError) -> EngineError {
        warn!("{err}");
        err
    }

    fn card_index(&self, card: CardId) -> Result<usize> {
        let idx = card.raw() as usize;
        if idx < self.cards.len() {
            Ok(idx)
        } else {
            Err(Self::reject(EngineError::UnknownCard(card)))
        }
    }

    fn zone_index(&self, zone: ZoneId) -> Result<usize> {
        let idx = zone.raw() as usize;
        if idx < self.zones.len() {
            Ok(idx)
        } else {
            Err(Self::reject(EngineError::UnknownZone(zone)))
        }
    }

    fn deck_index(&self, deck: DeckId) -> Result<usize> {
        self.decks
            .iter()
            .position(|d| d.id() == deck)
            .ok_or_else(|| Self::reject(EngineError::UnknownDeck(deck)))
    }

    fn player_index(&self, player: PlayerId) -> Result<usize> {
        let idx = player.index();
        if idx < self.players.len() {
            Ok(idx)
        } else {
            Err(Self::reject(EngineError::UnknownPlayer(player)))
        }
    }

    /// Fail unless `zone` can take `incoming` more cards.
    fn ensure_room(&self, zone: usize, incoming: usize) -> Result<()> {
        let zone = &self.zones[zone];
        match zone.max_cards() {
            Some(capacity) if zone.len() + incoming > capacity => {
                Err(Self::reject(EngineError::ZoneFull {
                    name: zone.name().to_owned(),
                    capacity,
                }))
            }
            _ => Ok(()),
        }
    }

    fn ensure_out_of_play(&self, card: CardId) -> Result<()> {
        if self.locations.contains_key(&card) {
            Err(Self::reject(EngineError::CardInPlay(card)))
        } else {
            Ok(())
        }
    }
}

impl EngineOperations for Table {
    fn create_board(&mut self, width: u32, height: u32) {
        self.board = Some(Board { width, height });
        debug!("board created ({width}x{height})");
        self.record(TableEvent::BoardCreated { width, height });
    }

    fn create_player(&mut self, name: Option<&str>) -> PlayerId {
        assert!(self.players.len() < u8::MAX as usize, "At most 255 players supported");

        let id = PlayerId::new(self.players.len() as u8);
        let player = Player::new(id, name);
        debug!("{id} seated as {:?}", player.name());
        self.players.push(player);
        self.record(TableEvent::PlayerCreated { player: id });
        id
    }

    fn create_zone(&mut self, config: ZoneConfig) -> Result<ZoneId> {
        if config.geometry.is_some() && self.board.is_none() {
            return Err(Self::reject(EngineError::NoBoard(config.name)));
        }

        match config.owner {
            Some(owner) => {
                let player = &self.players[self.player_index(owner)?];
                if player.zone(&config.name).is_some() {
                    return Err(Self::reject(EngineError::DuplicateZone {
                        owner: player.name().to_owned(),
                        name: config.name,
                    }));
                }
            }
            None => {
                if self.find_zone(&config.name, None).is_some() {
                    return Err(Self::reject(EngineError::DuplicateZone {
                        owner: "shared".to_owned(),
                        name: config.name,
                    }));
                }
            }
        }

        if self.zones.len() >= usize::from(u16::MAX) {
            return Err(Self::reject(EngineError::TooManyZones(self.zones.len())));
        }

        let id = ZoneId::new(self.zones.len() as u16);
        let owner = config.owner;
        if let Some(owner) = owner {
            self.players[owner.index()].register_zone(&config.name, id);
        }

        debug!("{id} created: {:?} (owner {owner:?})", config.name);
        self.zones.push(Zone::new(id, config));
        self.record(TableEvent::ZoneCreated { zone: id, owner });
        Ok(id)
    }

    fn create_card(&mut self, suit: Suit, rank: Rank, values: &RankValues) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        self.cards.push(Card::new(id, suit, rank, values));
        self.record(TableEvent::CardCreated { card: id });
        id
    }

    fn create_deck(&mut self, owner: Option<PlayerId>, cards: &[CardId]) -> Result<DeckId> {
        if let Some(owner) = owner {
            self.player_index(owner)?;
        }

        let id = DeckId::owned_by(owner);
        if self.decks.iter().any(|d| d.id() == id) {
            return Err(Self::reject(EngineError::DeckExists(id)));
        }

        for (i, &card) in cards.iter().enumerate() {
            self.card_index(card)?;
            self.ensure_out_of_play(card)?;
            if cards[..i].contains(&card) {
                return Err(Self::reject(EngineError::CardInPlay(card)));
            }
        }

        for &card in cards {
            self.locations.insert(card, CardLocation::Deck(id));
        }
        self.decks.push(Deck::new(owner, cards));

        debug!("{id} created with {} cards", cards.len());
        self.record(TableEvent::DeckCreated {
            deck: id,
            size: cards.len(),
        });
        Ok(id)
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.raw() as usize)
    }

    fn deck(&self, id: DeckId) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id() == id)
    }

    fn zone_id(&self, owner: PlayerId) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|z| z.owner() == Some(owner))
            .map(Zone::id)
    }

    fn deck_id(&self, owner: PlayerId) -> Option<DeckId> {
        self.decks
            .iter()
            .find(|d| d.owner() == Some(owner))
            .map(Deck::id)
    }

    fn find_zone(&self, name: &str, owner: Option<PlayerId>) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|z| z.owner() == owner && z.name() == name)
            .map(Zone::id)
    }

    fn card_location(&self, card: CardId) -> Option<CardLocation> {
        self.locations.get(&card).copied()
    }

    fn move_card_to_zone(
        &mut self,
        card: CardId,
        from: Option<ZoneId>,
        to: Option<ZoneId>,
        face_up: bool,
    ) -> Result<()> {
        let card_idx = self.card_index(card)?;
        let current = self.card_location(card);

        match from {
            Some(zone) => {
                self.zone_index(zone)?;
                if current != Some(CardLocation::Zone(zone)) {
                    return Err(Self::reject(EngineError::CardNotInZone { card, zone }));
                }
            }
            None => self.ensure_out_of_play(card)?,
        }

        let destination = match to {
            Some(zone) => {
                let idx = self.zone_index(zone)?;
                if from != Some(zone) {
                    self.ensure_room(idx, 1)?;
                }
                Some((zone, idx))
            }
            None => None,
        };

        // Validated; nothing below can fail.
        if let Some(zone) = from {
            self.zones[zone.raw() as usize].remove(card);
        }
        self.cards[card_idx].set_face_up(face_up);
        match destination {
            Some((zone, idx)) => {
                self.zones[idx].push(card);
                self.locations.insert(card, CardLocation::Zone(zone));
            }
            None => {
                self.locations.remove(&card);
            }
        }

        let to = destination.map(|(zone, _)| CardLocation::Zone(zone));
        debug!("{card} moved {current:?} -> {to:?} (face up: {face_up})");
        self.record(TableEvent::CardMoved {
            card,
            from: current,
            to,
            face_up,
        });
        Ok(())
    }

    fn move_top_card(&mut self, from: ZoneId, to: ZoneId) -> Result<CardId> {
        let from_idx = self.zone_index(from)?;
        let to_idx = self.zone_index(to)?;
        let card = self.zones[from_idx]
            .top()
            .ok_or_else(|| Self::reject(EngineError::EmptyZone(from)))?;

        let face_up = self.zones[to_idx]
            .face_policy()
            .apply(self.cards[card.raw() as usize].is_face_up());
        self.move_card_to_zone(card, Some(from), Some(to), face_up)?;
        Ok(card)
    }

    fn place_card(&mut self, card: CardId, zone: ZoneId) -> Result<()> {
        let card_idx = self.card_index(card)?;
        let zone_idx = self.zone_index(zone)?;
        let face_up = self.zones[zone_idx]
            .face_policy()
            .apply(self.cards[card_idx].is_face_up());
        self.move_card_to_zone(card, None, Some(zone), face_up)
    }

    fn add_card(&mut self, deck: DeckId, card: CardId) -> Result<()> {
        let deck_idx = self.deck_index(deck)?;
        self.card_index(card)?;
        self.ensure_out_of_play(card)?;

        self.decks[deck_idx].add(card);
        self.locations.insert(card, CardLocation::Deck(deck));

        let face_up = self.cards[card.raw() as usize].is_face_up();
        debug!("{card} added to {deck}");
        self.record(TableEvent::CardMoved {
            card,
            from: None,
            to: Some(CardLocation::Deck(deck)),
            face_up,
        });
        Ok(())
    }

    fn remove_card(&mut self, deck: DeckId, card: CardId) -> Result<bool> {
        let deck_idx = self.deck_index(deck)?;
        if !self.decks[deck_idx].remove(card) {
            return Ok(false);
        }

        self.locations.remove(&card);
        let face_up = self.cards[card.raw() as usize].is_face_up();
        debug!("{card} removed from {deck}");
        self.record(TableEvent::CardMoved {
            card,
            from: Some(CardLocation::Deck(deck)),
            to: None,
            face_up,
        });
        Ok(true)
    }

    fn deal_from_deck(&mut self, deck: DeckId, zone: ZoneId, count: usize) -> Result<usize> {
        let deck_idx = self.deck_index(deck)?;
        let zone_idx = self.zone_index(zone)?;

        let n = count.min(self.decks[deck_idx].len());
        self.ensure_room(zone_idx, n)?;

        let policy = self.zones[zone_idx].face_policy();
        for card in self.decks[deck_idx].deal(n) {
            let card_idx = card.raw() as usize;
            let face_up = policy.apply(self.cards[card_idx].is_face_up());
            self.cards[card_idx].set_face_up(face_up);
            self.zones[zone_idx].push(card);
            self.locations.insert(card, CardLocation::Zone(zone));
            self.record(TableEvent::CardMoved {
                card,
                from: Some(CardLocation::Deck(deck)),
                to: Some(CardLocation::Zone(zone)),
                face_up,
            });
        }

        debug!("dealt {n} cards from {deck} to {zone}");
        Ok(n)
    }

    fn shuffle_deck(&mut self, deck: DeckId) -> Result<()> {
        let deck_idx = self.deck_index(deck)?;
        self.decks[deck_idx].shuffle(&mut self.rng);
        debug!("{deck} shuffled");
        self.record(TableEvent::DeckShuffled { deck });
        Ok(())
    }

    fn shuffle_zone(&mut self, zone: ZoneId) -> Result<()> {
        let zone_idx = self.zone_index(zone)?;
        self.zones[zone_idx].shuffle(&mut self.rng);
        debug!("{zone} shuffled");
        self.record(TableEvent::ZoneShuffled { zone });
        Ok(())
    }

    fn flip_card(&mut self, card: CardId) -> Result<bool> {
        let card_idx = self.card_index(card)?;
        let face_up = !self.cards[card_idx].is_face_up();
        self.cards[card_idx].set_face_up(face_up);
        self.record(TableEvent::CardFlipped { card, face_up });
        Ok(face_up)
    }

    fn set_score(&mut self, player: PlayerId, score: i64) -> Result<()> {
        let idx = self.player_index(player)?;
        self.players[idx].set_score(score);
        self.record(TableEvent::ScoreChanged { player, score });
        Ok(())
    }

    fn adjust_score(&mut self, player: PlayerId, delta: i64) -> Result<i64> {
        let idx = self.player_index(player)?;
        self.players[idx].adjust_score(delta);
        let score = self.players[idx].score();
        self.record(TableEvent::ScoreChanged { player, score });
        Ok(score)
    }

    fn rng(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FacePolicy;

    fn seated(n: usize) -> (Table, Vec<PlayerId>) {
        let mut table = Table::new(42);
        let players = (0..n).map(|_| table.create_player(None)).collect();
        (table, players)
    }

    fn card(table: &mut Table, rank: Rank) -> CardId {
        table.create_card(Suit::Spades, rank, &RankValues::default())
    }

    #[test]
    fn test_ids_are_monotonic() {
        let (mut table, players) = seated(3);
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(table.player(PlayerId::new(1)).map(Player::name), Some("Player 1"));

        let a = card(&mut table, Rank::Two);
        let b = card(&mut table, Rank::Three);
        assert_eq!(a, CardId::new(0));
        assert_eq!(b, CardId::new(1));
    }

    #[test]
    fn test_zone_registered_with_owner() {
        let (mut table, players) = seated(2);
        let hand = table
            .create_zone(ZoneConfig::new("hand").with_owner(players[1]))
            .unwrap();

        assert_eq!(table.player_zone(players[1], "hand"), Some(hand));
        assert_eq!(table.player_zone(players[0], "hand"), None);
        assert_eq!(table.zone_id(players[1]), Some(hand));
        assert_eq!(table.find_zone("hand", Some(players[1])), Some(hand));
        assert_eq!(table.find_zone("hand", None), None);
    }

    #[test]
    fn test_duplicate_zone_name_rejected() {
        let (mut table, players) = seated(2);
        table
            .create_zone(ZoneConfig::new("hand").with_owner(players[0]))
            .unwrap();

        let err = table.create_zone(ZoneConfig::new("hand").with_owner(players[0]));
        assert!(matches!(err, Err(EngineError::DuplicateZone { .. })));

        // Same name, different owner is fine
        assert!(table
            .create_zone(ZoneConfig::new("hand").with_owner(players[1]))
            .is_ok());
        assert_eq!(table.zones().len(), 2);
    }

    #[test]
    fn test_zone_with_geometry_needs_board() {
        let mut table = Table::new(0);
        let err = table.create_zone(ZoneConfig::new("pile").at(0, 0, 1, 1));
        assert!(matches!(err, Err(EngineError::NoBoard(_))));
        assert!(table.zones().is_empty());

        // Headless zones never need a board
        assert!(table.create_zone(ZoneConfig::new("pile")).is_ok());

        table.create_board(10, 6);
        assert!(table.create_zone(ZoneConfig::new("mat").at(0, 0, 1, 1)).is_ok());
    }

    #[test]
    fn test_zone_limit_is_an_error() {
        let (mut table, players) = seated(1);
        for i in 0..u16::MAX {
            table
                .create_zone(ZoneConfig::new(format!("z{i}")).with_owner(players[0]))
                .unwrap();
        }

        let err = table.create_zone(ZoneConfig::new("one-more").with_owner(players[0]));
        assert!(matches!(err, Err(EngineError::TooManyZones(65535))));
        assert_eq!(table.player_zone(players[0], "one-more"), None);
    }

    #[test]
    fn test_zone_for_unknown_owner() {
        let mut table = Table::new(0);
        let err = table.create_zone(ZoneConfig::new("hand").with_owner(PlayerId::new(4)));
        assert!(matches!(err, Err(EngineError::UnknownPlayer(_))));
    }

    #[test]
    fn test_move_relocates_identity() {
        let (mut table, players) = seated(1);
        let a = table.create_zone(ZoneConfig::new("a").with_owner(players[0])).unwrap();
        let b = table.create_zone(ZoneConfig::new("b").with_owner(players[0])).unwrap();
        let c = card(&mut table, Rank::Nine);

        table.move_card_to_zone(c, None, Some(a), false).unwrap();
        table.move_card_to_zone(c, Some(a), Some(b), true).unwrap();

        assert_eq!(table.card_amount_in_zone(a), 0);
        assert_eq!(table.zone_cards(b), &[c]);
        assert_eq!(table.card_location(c), Some(CardLocation::Zone(b)));
        assert!(table.card(c).unwrap().is_face_up());
        assert_eq!(table.cards().len(), 1);
    }

    #[test]
    fn test_move_from_wrong_zone_changes_nothing() {
        let (mut table, players) = seated(1);
        let a = table.create_zone(ZoneConfig::new("a").with_owner(players[0])).unwrap();
        let b = table.create_zone(ZoneConfig::new("b").with_owner(players[0])).unwrap();
        let c = card(&mut table, Rank::Nine);
        table.move_card_to_zone(c, None, Some(a), false).unwrap();

        let err = table.move_card_to_zone(c, Some(b), Some(a), true);
        assert!(matches!(err, Err(EngineError::CardNotInZone { .. })));

        let err = table.move_card_to_zone(c, None, Some(b), true);
        assert!(matches!(err, Err(EngineError::CardInPlay(_))));

        assert_eq!(table.zone_cards(a), &[c]);
        assert!(!table.card(c).unwrap().is_face_up());
    }

    #[test]
    fn test_move_into_full_zone_changes_nothing() {
        let (mut table, players) = seated(1);
        let src = table.create_zone(ZoneConfig::new("src").with_owner(players[0])).unwrap();
        let slot = table
            .create_zone(ZoneConfig::new("slot").with_owner(players[0]).with_max_cards(1))
            .unwrap();
        let x = card(&mut table, Rank::Two);
        let y = card(&mut table, Rank::Three);
        table.move_card_to_zone(x, None, Some(slot), true).unwrap();
        table.move_card_to_zone(y, None, Some(src), true).unwrap();

        let err = table.move_card_to_zone(y, Some(src), Some(slot), true);
        assert!(matches!(err, Err(EngineError::ZoneFull { capacity: 1, .. })));
        assert_eq!(table.zone_cards(src), &[y]);
        assert_eq!(table.zone_cards(slot), &[x]);

        // Re-stacking within the full zone is allowed
        assert!(table.move_card_to_zone(x, Some(slot), Some(slot), false).is_ok());
    }

    #[test]
    fn test_move_out_of_play() {
        let (mut table, players) = seated(1);
        let a = table.create_zone(ZoneConfig::new("a").with_owner(players[0])).unwrap();
        let c = card(&mut table, Rank::Ace);
        table.move_card_to_zone(c, None, Some(a), true).unwrap();

        table.move_card_to_zone(c, Some(a), None, false).unwrap();
        assert_eq!(table.card_location(c), None);
        assert_eq!(table.card_amount_in_zone(a), 0);

        // And back into play from nowhere
        table.move_card_to_zone(c, None, Some(a), true).unwrap();
        assert_eq!(table.top_card(a), Some(c));
    }

    #[test]
    fn test_move_top_card_applies_face_policy() {
        let (mut table, players) = seated(1);
        let hand = table
            .create_zone(ZoneConfig::new("hand").with_owner(players[0]).face_down())
            .unwrap();
        let battle = table
            .create_zone(ZoneConfig::new("battle").with_owner(players[0]).face_up())
            .unwrap();
        let low = card(&mut table, Rank::Two);
        let high = card(&mut table, Rank::King);
        table.place_card(low, hand).unwrap();
        table.place_card(high, hand).unwrap();

        let moved = table.move_top_card(hand, battle).unwrap();
        assert_eq!(moved, high);
        assert!(table.card(high).unwrap().is_face_up());
        assert!(!table.card(low).unwrap().is_face_up());

        let empty = table.create_zone(ZoneConfig::new("empty")).unwrap();
        assert!(matches!(
            table.move_top_card(empty, battle),
            Err(EngineError::EmptyZone(_))
        ));
    }

    #[test]
    fn test_create_deck_takes_cards_out_of_play() {
        let (mut table, players) = seated(1);
        let hand = table.create_zone(ZoneConfig::new("hand").with_owner(players[0])).unwrap();
        let loose = card(&mut table, Rank::Four);
        let held = card(&mut table, Rank::Five);
        table.place_card(held, hand).unwrap();

        let err = table.create_deck(Some(players[0]), &[loose, held]);
        assert!(matches!(err, Err(EngineError::CardInPlay(_))));
        assert_eq!(table.deck_id(players[0]), None);

        let deck = table.create_deck(Some(players[0]), &[loose]).unwrap();
        assert_eq!(deck.to_string(), "deck-0");
        assert_eq!(table.card_location(loose), Some(CardLocation::Deck(deck)));

        let again = table.create_deck(Some(players[0]), &[]);
        assert!(matches!(again, Err(EngineError::DeckExists(_))));
    }

    #[test]
    fn test_deck_add_remove() {
        let mut table = Table::new(1);
        let deck = table.create_deck(None, &[]).unwrap();
        let c = card(&mut table, Rank::Six);

        table.add_card(deck, c).unwrap();
        assert_eq!(table.deck_size(deck), 1);
        assert!(matches!(table.add_card(deck, c), Err(EngineError::CardInPlay(_))));

        assert!(table.remove_card(deck, c).unwrap());
        assert!(!table.remove_card(deck, c).unwrap());
        assert_eq!(table.deck_size(deck), 0);
        assert_eq!(table.card_location(c), None);
    }

    #[test]
    fn test_deal_respects_capacity() {
        let mut table = Table::new(3);
        let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
        let slot = table.create_zone(ZoneConfig::new("slot").with_max_cards(3)).unwrap();

        assert!(matches!(
            table.deal_from_deck(deck, slot, 4),
            Err(EngineError::ZoneFull { .. })
        ));
        assert_eq!(table.deck_size(deck), 52);

        assert_eq!(table.deal_from_deck(deck, slot, 3).unwrap(), 3);
        assert_eq!(table.deck_size(deck), 49);
        assert!(table.zone(slot).unwrap().is_full());
    }

    #[test]
    fn test_deal_round_robin() {
        let (mut table, players) = seated(2);
        let zones: Vec<_> = players
            .iter()
            .map(|&p| table.create_zone(ZoneConfig::new("hand").with_owner(p)).unwrap())
            .collect();
        let values = RankValues::default();
        let cards: Vec<_> = (0..5)
            .map(|_| table.create_card(Suit::Clubs, Rank::Two, &values))
            .collect();
        let deck = table.create_deck(None, &cards).unwrap();

        let dealt = table.deal_round_robin(deck, &zones, 3).unwrap();
        assert_eq!(dealt, 5);
        assert_eq!(table.card_amount_in_zone(zones[0]), 3);
        assert_eq!(table.card_amount_in_zone(zones[1]), 2);
        // Top card went to the first zone
        assert_eq!(table.zone_cards(zones[0])[0], cards[4]);
    }

    #[test]
    fn test_deal_round_robin_checks_every_zone_first() {
        let (mut table, players) = seated(2);
        let a = table.create_zone(ZoneConfig::new("hand").with_owner(players[0])).unwrap();
        let b = table
            .create_zone(ZoneConfig::new("hand").with_owner(players[1]).with_max_cards(1))
            .unwrap();
        let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
        table.drain_events();

        let err = table.deal_round_robin(deck, &[a, b], 3);
        assert!(matches!(err, Err(EngineError::ZoneFull { capacity: 1, .. })));
        assert_eq!(table.card_amount_in_zone(a), 0);
        assert_eq!(table.card_amount_in_zone(b), 0);
        assert_eq!(table.deck_size(deck), 52);
        assert!(table.events().is_empty());

        // One card each fits
        assert_eq!(table.deal_round_robin(deck, &[a, b], 1).unwrap(), 2);
    }

    #[test]
    fn test_deal_round_robin_short_deck_fits_smaller_share() {
        let (mut table, players) = seated(2);
        let a = table.create_zone(ZoneConfig::new("hand").with_owner(players[0])).unwrap();
        let b = table
            .create_zone(ZoneConfig::new("hand").with_owner(players[1]).with_max_cards(1))
            .unwrap();
        let values = RankValues::default();
        let cards: Vec<_> = (0..3)
            .map(|_| table.create_card(Suit::Hearts, Rank::Four, &values))
            .collect();
        let deck = table.create_deck(None, &cards).unwrap();

        // Only three cards: a takes two, b takes one
        assert_eq!(table.deal_round_robin(deck, &[a, b], 5).unwrap(), 3);
        assert_eq!(table.card_amount_in_zone(a), 2);
        assert_eq!(table.card_amount_in_zone(b), 1);
    }

    #[test]
    fn test_move_all_onto_itself_moves_nothing() {
        let (mut table, players) = seated(1);
        let z = table.create_zone(ZoneConfig::new("pile").with_owner(players[0])).unwrap();
        let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
        table.deal_from_deck(deck, z, 3).unwrap();
        let before = table.zone_cards(z).to_vec();

        assert_eq!(table.move_all(z, z).unwrap(), 0);
        assert_eq!(table.zone_cards(z), before.as_slice());
    }

    #[test]
    fn test_move_all_checks_room_first() {
        let (mut table, players) = seated(1);
        let src = table.create_zone(ZoneConfig::new("src").with_owner(players[0])).unwrap();
        let dst = table
            .create_zone(ZoneConfig::new("dst").with_owner(players[0]).with_max_cards(2))
            .unwrap();
        let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
        table.deal_from_deck(deck, src, 3).unwrap();

        assert!(matches!(table.move_all(src, dst), Err(EngineError::ZoneFull { .. })));
        assert_eq!(table.card_amount_in_zone(src), 3);
        assert_eq!(table.card_amount_in_zone(dst), 0);

        assert!(matches!(
            table.move_all(ZoneId::new(40), dst),
            Err(EngineError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_flip_and_scores() {
        let (mut table, players) = seated(1);
        let c = card(&mut table, Rank::Jack);

        assert!(table.flip_card(c).unwrap());
        assert!(!table.flip_card(c).unwrap());

        table.set_score(players[0], 5).unwrap();
        assert_eq!(table.adjust_score(players[0], -2).unwrap(), 3);
        assert!(matches!(
            table.set_score(PlayerId::new(9), 1),
            Err(EngineError::UnknownPlayer(_))
        ));
    }

    #[test]
    fn test_lookups_on_unknown_ids() {
        let table = Table::new(0);
        assert_eq!(table.card_amount_in_zone(ZoneId::new(3)), 0);
        assert_eq!(table.deck_size(DeckId::owned_by(None)), 0);
        assert!(table.zone_cards(ZoneId::new(3)).is_empty());
        assert_eq!(table.compare_card_ids(CardId::new(0), CardId::new(1)), None);
        assert_eq!(table.zone_id(PlayerId::new(0)), None);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let build = |seed| {
            let mut table = Table::new(seed);
            let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
            table.shuffle_deck(deck).unwrap();
            table.deck(deck).unwrap().cards().to_vec()
        };

        assert_eq!(build(7), build(7));
        assert_ne!(build(7), build(8));
    }

    #[test]
    fn test_events_are_drained() {
        let (mut table, _) = seated(1);
        let zone = table
            .create_zone(ZoneConfig {
                face: FacePolicy::FaceUp,
                ..ZoneConfig::new("pile")
            })
            .unwrap();
        let c = card(&mut table, Rank::Queen);
        table.place_card(c, zone).unwrap();

        let events = table.drain_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], TableEvent::PlayerCreated { .. }));
        assert_eq!(
            events[3],
            TableEvent::CardMoved {
                card: c,
                from: None,
                to: Some(CardLocation::Zone(zone)),
                face_up: true,
            }
        );
        assert!(table.events().is_empty());
    }

    #[test]
    fn test_rng_checkpoint() {
        let mut table = Table::new(11);
        table.rng().coin_flip();
        let saved = table.rng_state();
        let a: Vec<_> = (0..8).map(|_| table.rng().index_inclusive(100)).collect();

        table.restore_rng(&saved);
        let b: Vec<_> = (0..8).map(|_| table.rng().index_inclusive(100)).collect();
        assert_eq!(a, b);
    }
}

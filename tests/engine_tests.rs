//! Table behaviour through the public `EngineOperations` interface.
//!
//! These tests drive the table the way a game or a presentation layer
//! would: build zones, deal, move, shuffle, and read snapshots.

use std::cmp::Ordering;
use std::collections::HashSet;

use card_table::cards::{Rank, Suit};
use card_table::core::{AceRank, CardLocation, DeckId, PlayerId, RankValues, ZoneConfig};
use card_table::engine::{EngineOperations, Table, TableEvent};
use card_table::error::EngineError;

/// A standard deck has 52 unique cards, 13 per suit.
#[test]
fn test_standard_deck_construction() {
    for (ace, ace_value) in [(AceRank::High, 14), (AceRank::Low, 1)] {
        let mut table = Table::new(42);
        let values = RankValues::new(ace);
        let deck = table.build_standard_deck(None, &values).unwrap();

        assert_eq!(table.deck_size(deck), 52);

        let cards = table.deck(deck).unwrap().cards().to_vec();
        let faces: HashSet<_> = cards
            .iter()
            .map(|&id| {
                let card = table.card(id).unwrap();
                (card.suit(), card.rank())
            })
            .collect();
        assert_eq!(faces.len(), 52);

        for suit in Suit::ALL {
            let count = cards
                .iter()
                .filter(|&&id| table.card(id).unwrap().suit() == suit)
                .count();
            assert_eq!(count, 13);
        }

        for &id in &cards {
            let card = table.card(id).unwrap();
            assert_eq!(card.value(), values.value(card.rank()));
            if card.rank() == Rank::Ace {
                assert_eq!(card.value(), ace_value);
            }
        }
    }
}

/// Moving a card keeps the total count and shifts exactly one card.
#[test]
fn test_move_between_zones_keeps_count() {
    let mut table = Table::new(1);
    let p = table.create_player(None);
    let a = table.create_zone(ZoneConfig::new("a").with_owner(p)).unwrap();
    let b = table.create_zone(ZoneConfig::new("b").with_owner(p)).unwrap();
    let deck = table.build_standard_deck(Some(p), &RankValues::default()).unwrap();
    table.deal_from_deck(deck, a, 10).unwrap();
    table.deal_from_deck(deck, b, 4).unwrap();

    let card = table.zone_cards(a)[3];
    table.move_card_to_zone(card, Some(a), Some(b), true).unwrap();

    assert_eq!(table.card_amount_in_zone(a), 9);
    assert_eq!(table.card_amount_in_zone(b), 5);
    assert_eq!(table.top_card(b), Some(card));
    assert_eq!(table.card_location(card), Some(CardLocation::Zone(b)));
}

/// Cards in zones and decks are never double-counted.
#[test]
fn test_card_in_one_place_at_a_time() {
    let mut table = Table::new(5);
    let players: Vec<_> = (0..3).map(|_| table.create_player(None)).collect();
    let hands: Vec<_> = players
        .iter()
        .map(|&p| table.create_zone(ZoneConfig::new("hand").with_owner(p)).unwrap())
        .collect();
    let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
    table.shuffle_deck(deck).unwrap();
    table.deal_round_robin(deck, &hands, 5).unwrap();

    for _ in 0..10 {
        table.move_top_card(hands[0], hands[1]).ok();
        table.move_top_card(hands[1], hands[2]).ok();
        table.move_top_card(hands[2], hands[0]).ok();
    }

    let mut seen = HashSet::new();
    for &hand in &hands {
        for &card in table.zone_cards(hand) {
            assert!(seen.insert(card), "{card} appears twice");
            assert_eq!(table.card_location(card), Some(CardLocation::Zone(hand)));
        }
    }
    for &card in table.deck(deck).unwrap().cards() {
        assert!(seen.insert(card), "{card} appears twice");
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn test_compare_cards_by_value_only() {
    let mut table = Table::new(0);
    let values = RankValues::default();
    let ten = table.create_card(Suit::Spades, Rank::Ten, &values);
    let seven = table.create_card(Suit::Hearts, Rank::Seven, &values);
    let other_ten = table.create_card(Suit::Diamonds, Rank::Ten, &values);

    assert_eq!(table.compare_card_ids(ten, seven), Some(Ordering::Greater));
    assert_eq!(table.compare_card_ids(seven, ten), Some(Ordering::Less));
    assert_eq!(table.compare_card_ids(ten, other_ten), Some(Ordering::Equal));
    assert_eq!(table.compare_card_ids(ten, ten), Some(Ordering::Equal));
}

/// `zone_id` / `deck_id` return the first match in creation order.
#[test]
fn test_first_match_lookups() {
    let mut table = Table::new(0);
    let p = table.create_player(Some("Dana"));
    let first = table.create_zone(ZoneConfig::new("hand").with_owner(p)).unwrap();
    let _second = table.create_zone(ZoneConfig::new("reserve").with_owner(p)).unwrap();
    let deck = table.create_deck(Some(p), &[]).unwrap();

    assert_eq!(table.zone_id(p), Some(first));
    assert_eq!(table.deck_id(p), Some(deck));
    assert_eq!(deck, DeckId::owned_by(Some(p)));
    assert_eq!(table.deck_id(PlayerId::new(7)), None);
}

#[test]
fn test_failed_mutations_leave_no_events() {
    let mut table = Table::new(0);
    let p = table.create_player(None);
    let slot = table
        .create_zone(ZoneConfig::new("slot").with_owner(p).with_max_cards(1))
        .unwrap();
    let values = RankValues::default();
    let a = table.create_card(Suit::Clubs, Rank::Two, &values);
    let b = table.create_card(Suit::Clubs, Rank::Three, &values);
    table.place_card(a, slot).unwrap();
    table.drain_events();

    let err = table.place_card(b, slot).unwrap_err();
    assert!(matches!(err, EngineError::ZoneFull { capacity: 1, .. }));
    assert!(err.to_string().contains("slot"));
    assert!(table.events().is_empty());
    assert_eq!(table.card_location(b), None);
}

#[test]
fn test_event_log_tracks_deal() {
    let mut table = Table::new(0);
    let p = table.create_player(None);
    let hand = table
        .create_zone(ZoneConfig::new("hand").with_owner(p).face_up())
        .unwrap();
    let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
    table.drain_events();

    table.deal_from_deck(deck, hand, 3).unwrap();
    let events = table.drain_events();

    assert_eq!(events.len(), 3);
    for event in &events {
        match event {
            TableEvent::CardMoved { from, to, face_up, .. } => {
                assert_eq!(*from, Some(CardLocation::Deck(deck)));
                assert_eq!(*to, Some(CardLocation::Zone(hand)));
                assert!(*face_up);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}

#[test]
fn test_snapshot_reflects_table() {
    let mut table = Table::with_board(8, 12, 8);
    let p = table.create_player(Some("Eli"));
    let pile = table
        .create_zone(ZoneConfig::new("pile").with_owner(p).face_up().at(1, 1, 2, 2))
        .unwrap();
    let deck = table.build_standard_deck(None, &RankValues::default()).unwrap();
    table.deal_from_deck(deck, pile, 2).unwrap();
    table.adjust_score(p, 3).unwrap();

    let snap = table.snapshot();
    assert_eq!(snap.players[0].score, 3);
    let view = snap.zone("pile", Some(p)).unwrap();
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.geometry.map(|g| g.width), Some(2));
    assert_eq!(snap.decks[0].size, 50);
}

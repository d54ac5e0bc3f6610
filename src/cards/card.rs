//! Cards: suit, rank, derived value and orientation.
//!
//! A `Card` is created once by the table and never duplicated. Moving it
//! between zones relocates its id; the card record itself stays in the
//! table's registry and only its face-up flag changes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::config::RankValues;
use crate::core::entity::CardId;

/// The four French suits, in standard deck construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// The thirteen ranks, ace first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in `Rank::ALL` (ace = 0, king = 12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label: "A", "2" ... "10", "J", "Q", "K".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A physical card.
///
/// `id`, `suit`, `rank` and `value` are fixed at creation. Only the
/// orientation changes over the card's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
    value: i32,
    face_up: bool,
}

impl Card {
    /// Create a face-down card, deriving its value from `values`.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank, values: &RankValues) -> Self {
        Self {
            id,
            suit,
            rank,
            value: values.value(rank),
            face_up: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

/// Order two cards by value only. Suit never breaks a tie.
///
/// ```
/// use std::cmp::Ordering;
/// use card_table::cards::{compare_cards, Card, Rank, Suit};
/// use card_table::core::{CardId, RankValues};
///
/// let values = RankValues::default();
/// let ten = Card::new(CardId::new(0), Suit::Spades, Rank::Ten, &values);
/// let seven = Card::new(CardId::new(1), Suit::Hearts, Rank::Seven, &values);
/// let other_ten = Card::new(CardId::new(2), Suit::Hearts, Rank::Ten, &values);
///
/// assert_eq!(compare_cards(&ten, &seven), Ordering::Greater);
/// assert_eq!(compare_cards(&seven, &ten), Ordering::Less);
/// assert_eq!(compare_cards(&ten, &other_ten), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_cards(a: &Card, b: &Card) -> Ordering {
    a.value.cmp(&b.value)
}

//! Card system: suits, ranks, cards and decks.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the fixed enumerations of a French deck
//! - `Card`: one physical card with a value derived from its rank
//! - `Deck`: a detached ordered pile, dealt from the top
//!
//! Rank values come from `core::RankValues`, never from a hardcoded constant.

pub mod card;
pub mod deck;

pub use card::{compare_cards, Card, Rank, Suit};
pub use deck::Deck;

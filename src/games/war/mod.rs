//! War.
//!
//! Two players split a shuffled deck. Each round both reveal their top
//! card; the higher value takes both into a won-cards pile, which is
//! shuffled back into the hand when the hand runs out. A player with an
//! empty hand and an empty won-cards pile loses.
//!
//! Equal cards are settled by the configured `TiePolicy`: a "war" (bury
//! cards face down, reveal again, bounded depth) or a coin flip.

mod config;
mod game;

pub use config::{TiePolicy, WarConfig};
pub use game::{Play, Resolution, RoundReport, WarGame, WarSeat, BATTLE_PILE, HAND, WON_CARDS};

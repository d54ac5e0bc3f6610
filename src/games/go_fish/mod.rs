//! Go Fish.
//!
//! Players ask each other for ranks they already hold. A hit hands over
//! every matching card and the asker goes again; a miss means drawing from
//! the shared pile and passing the turn. Four of a kind make a book worth
//! one point. The game ends when all thirteen books are out or the draw
//! pile is empty; most books wins.

mod config;
mod game;

pub use config::GoFishConfig;
pub use game::{AskOutcome, FishAction, FishSeat, FishTurn, GoFishGame, BOOKS, DRAW_PILE, HAND};

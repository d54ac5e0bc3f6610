//! Game driver trait for game implementations.
//!
//! Games implement `GameDriver` to define:
//! - Table setup
//! - What a round does
//! - Win/loss conditions
//!
//! The table calls nothing in here; drivers call the table.

pub mod driver;

pub use driver::{GameDriver, GamePhase, GameResult, TurnOrder};

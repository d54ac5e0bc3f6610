//! Core types: entity ids, players, RNG, configuration.
//!
//! This module contains the building blocks that know nothing about a
//! specific game. Games configure them rather than modifying the core.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::{CardId, CardLocation, DeckId, ZoneId};
pub use player::{GameStatus, GameWinner, Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use config::{AceRank, Board, FacePolicy, Geometry, RankValues, ZoneConfig};

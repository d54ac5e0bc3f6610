//! Zone system for card locations.
//!
//! Zones are **game-configured**, not hardcoded. Games define their zones
//! (hand, battle pile, won cards, books, draw pile, ...) via `ZoneConfig`.
//!
//! ## Key Types
//!
//! - `ZoneId`: Zone identifier (from `core::entity`)
//! - `ZoneConfig`: Zone properties (owner, capacity, face policy, layout)
//! - `Zone`: The ordered card pile itself

pub mod zone;

pub use zone::Zone;

// Re-export zone types from core for convenience
pub use crate::core::config::{FacePolicy, Geometry, ZoneConfig};
pub use crate::core::entity::ZoneId;

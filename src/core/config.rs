//! Table configuration types.
//!
//! Games configure the table by providing:
//! - `RankValues`: the rank → numeric value table used when cards are created
//! - `ZoneConfig`: name, owner, capacity, face policy and layout of a zone
//! - `Board`: the playing surface zones with a layout are placed on
//!
//! The table never hardcodes an ace value or a zone set. Games define them.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Rank;

/// Which end of the rank order the ace sits at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AceRank {
    /// Ace beats king (A = 14).
    #[default]
    High,
    /// Ace is the lowest card (A = 1).
    Low,
}

/// Rank → value table.
///
/// A card's value is a pure function of its rank through this table, so the
/// table is fixed when cards are created.
///
/// ```
/// use card_table::cards::Rank;
/// use card_table::core::{AceRank, RankValues};
///
/// let high = RankValues::new(AceRank::High);
/// let low = RankValues::new(AceRank::Low);
///
/// assert_eq!(high.value(Rank::Ace), 14);
/// assert_eq!(low.value(Rank::Ace), 1);
/// assert_eq!(low.value(Rank::King), 13);
///
/// let custom = RankValues::new(AceRank::High).with_value(Rank::Jack, 20);
/// assert_eq!(custom.value(Rank::Jack), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankValues {
    values: [i32; 13],
}

impl RankValues {
    /// Standard values: pips at face value, J=11, Q=12, K=13, ace per `ace`.
    #[must_use]
    pub fn new(ace: AceRank) -> Self {
        let mut values = [0; 13];
        for rank in Rank::ALL {
            values[rank.index()] = match rank {
                Rank::Ace => match ace {
                    AceRank::High => 14,
                    AceRank::Low => 1,
                },
                other => other.index() as i32 + 1,
            };
        }
        Self { values }
    }

    /// Override a single rank's value.
    #[must_use]
    pub fn with_value(mut self, rank: Rank, value: i32) -> Self {
        self.values[rank.index()] = value;
        self
    }

    /// Value of a rank.
    #[must_use]
    pub fn value(&self, rank: Rank) -> i32 {
        self.values[rank.index()]
    }
}

impl Default for RankValues {
    fn default() -> Self {
        Self::new(AceRank::default())
    }
}

impl From<AceRank> for RankValues {
    fn from(ace: AceRank) -> Self {
        Self::new(ace)
    }
}

/// Face orientation applied to cards entering a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacePolicy {
    /// Cards keep whatever orientation they arrive with.
    #[default]
    Keep,
    /// Cards are turned face up on entry (battle piles, won piles).
    FaceUp,
    /// Cards are turned face down on entry (hands in War, draw piles).
    FaceDown,
}

impl FacePolicy {
    /// Orientation a card ends up with after entering a zone with this policy.
    #[must_use]
    pub fn apply(self, face_up: bool) -> bool {
        match self {
            FacePolicy::Keep => face_up,
            FacePolicy::FaceUp => true,
            FacePolicy::FaceDown => false,
        }
    }
}

/// Advisory layout metadata for a presentation layer.
///
/// The table stores it and hands it back in snapshots; it has no effect on
/// game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Playing surface dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: u32,
    pub height: u32,
}

/// Configuration for a single zone.
///
/// Zone names are scoped by owner: two players may each own a "hand", but
/// one owner cannot own two zones with the same name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Name, unique per owner.
    pub name: String,

    /// Zone owner. `None` for shared zones (draw pile, market).
    pub owner: Option<PlayerId>,

    /// Maximum cards allowed. `None` for unlimited.
    pub max_cards: Option<usize>,

    /// Orientation applied to entering cards.
    pub face: FacePolicy,

    /// Layout on the board. Zones with a layout require a board.
    pub geometry: Option<Geometry>,
}

impl ZoneConfig {
    /// Create a new zone configuration (shared, unbounded, keeps orientation).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            max_cards: None,
            face: FacePolicy::Keep,
            geometry: None,
        }
    }

    /// Set the zone owner.
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Set the zone owner from an optional value.
    #[must_use]
    pub fn owned_by(mut self, owner: Option<PlayerId>) -> Self {
        self.owner = owner;
        self
    }

    /// Turn entering cards face up.
    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.face = FacePolicy::FaceUp;
        self
    }

    /// Turn entering cards face down.
    #[must_use]
    pub fn face_down(mut self) -> Self {
        self.face = FacePolicy::FaceDown;
        self
    }

    /// Set maximum card limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = Some(max);
        self
    }

    /// Place the zone on the board.
    #[must_use]
    pub fn at(mut self, x: i32, y: i32, width: u32, height: u32) -> Self {
        self.geometry = Some(Geometry::new(x, y, width, height));
        self
    }
}

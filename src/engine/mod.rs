//! The card table and the operations games are written against.
//!
//! - `ops`: the `EngineOperations` capability set
//! - `table`: `Table`, the in-memory session implementing it
//! - `event`: state-change notifications
//! - `snapshot`: read-only, serialisable views

pub mod event;
pub mod ops;
pub mod snapshot;
pub mod table;

pub use event::TableEvent;
pub use ops::EngineOperations;
pub use snapshot::{CardFace, CardView, DeckView, PlayerView, TableSnapshot, ZoneView};
pub use table::Table;

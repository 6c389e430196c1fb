//! Core world model for Stranded.
//!
//! A [`World`] is a small, fixed graph of rooms connected by named exits,
//! with items lying around in those rooms and a pointer to the room the
//! player currently stands in. Worlds are built from a serializable
//! [`WorldDef`] and validated on construction, so every exit always leads
//! somewhere and no item exists in two places at once.

/// World definitions as loaded from configuration.
pub mod def;
/// Movement directions and their abbreviations.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Rooms and room identifiers.
pub mod room;
/// The mutable world state: rooms plus the current-room pointer.
pub mod world;

/// Re-export definition types.
pub use def::{RoomDef, WorldDef};
/// Re-export direction helpers.
pub use direction::normalize_direction;
/// Re-export error types.
pub use error::{WwError, WwResult};
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export the world model.
pub use world::World;

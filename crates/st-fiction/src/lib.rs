//! Text-adventure engine for Stranded.
//!
//! Sits between a 3D/XR front end and the [`st_core::World`]: typed player
//! commands are parsed and executed against the world and the inventory,
//! selection and click events from the scene are routed through the
//! interaction bridge, and NPC conversations step through a fixed line
//! table. Every handler returns a [`Response`] for the front end to show;
//! nothing in here draws, plays audio, or blocks.

/// Interaction events from the scene and the selection state they drive.
pub mod bridge;
/// Game configuration: world, dialogue, and pickup tables.
pub mod config;
/// Linear per-NPC dialogue engine.
pub mod dialogue;
/// Error types for the fiction engine.
pub mod error;
/// Front-end contract and the loop that drives it.
pub mod frontend;
/// The player's inventory.
pub mod inventory;
/// Command parsing.
pub mod parser;
/// Game session tying everything together.
pub mod session;

pub use bridge::{Action, Bridge, InteractionEvent, InteractionKind, PickupTable, Pointer, ViewMode};
pub use config::GameConfig;
pub use dialogue::{DEFAULT_END_MARKER, DialogueEngine, DialogueState, DialogueTable};
pub use error::{FictionError, FictionResult};
pub use frontend::{Frontend, FrontendInput, SceneView, apply, run};
pub use inventory::Inventory;
pub use parser::{Command, parse_command};
pub use session::{GameSession, Response, SoundCue};

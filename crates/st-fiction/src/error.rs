//! Error types for the fiction engine.

use st_core::WwError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during play.
///
/// Player-facing variants display as the exact response line. None of them
/// are fatal: the session turns each one into text at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FictionError {
    /// The player tried to use an item they do not carry.
    #[error("You don't have a {0}.")]
    ItemNotHeld(String),

    /// The verb is not one the parser knows.
    #[error("I don't understand the command \"{0}\".")]
    UnknownCommand(String),

    /// No dialogue is defined for this NPC.
    #[error("There is nobody called {0} to talk to.")]
    UnknownNpc(String),

    /// The game configuration is inconsistent.
    #[error("invalid game configuration: {0}")]
    Config(String),

    /// World model error (bad direction, missing item, invalid world).
    #[error(transparent)]
    World(#[from] WwError),
}

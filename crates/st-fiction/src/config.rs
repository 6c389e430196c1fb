//! Game configuration: the static tables a session is built from.

use std::path::Path;

use serde::{Deserialize, Serialize};
use st_core::WorldDef;

use crate::bridge::PickupTable;
use crate::dialogue::{DEFAULT_END_MARKER, DialogueTable};
use crate::error::{FictionError, FictionResult};

/// Everything a session needs that is fixed at startup.
///
/// Read from JSON; all sections except the world may be left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rooms and the entry room.
    #[serde(flatten)]
    pub world: WorldDef,
    /// NPC lines.
    #[serde(default)]
    pub dialogues: DialogueTable,
    /// Text shown once a conversation runs out.
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
    /// Scene objects that are picked up when selected.
    #[serde(default)]
    pub pickups: PickupTable,
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GameConfig {
    /// A configuration with the given world and nothing else.
    pub fn new(world: WorldDef) -> Self {
        Self {
            world,
            dialogues: DialogueTable::new(),
            end_marker: default_end_marker(),
            pickups: PickupTable::new(),
        }
    }

    /// The crash-site demo.
    pub fn builtin() -> Self {
        Self::new(WorldDef::crash_site())
            .with_dialogues(DialogueTable::crash_site())
            .with_pickups(PickupTable::crash_site())
    }

    /// Set the dialogue table.
    pub fn with_dialogues(mut self, dialogues: DialogueTable) -> Self {
        self.dialogues = dialogues;
        self
    }

    /// Set the pickup table.
    pub fn with_pickups(mut self, pickups: PickupTable) -> Self {
        self.pickups = pickups;
        self
    }

    /// Set the end-of-conversation marker.
    pub fn with_end_marker(mut self, marker: impl Into<String>) -> Self {
        self.end_marker = marker.into();
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> FictionResult<Self> {
        serde_json::from_str(json).map_err(|e| FictionError::Config(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> FictionResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| FictionError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> FictionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FictionError::Config(e.to_string()))
    }

    /// Check the tables against each other.
    ///
    /// The world itself is validated when it is built.
    pub fn validate(&self) -> FictionResult<()> {
        self.dialogues.validate()?;
        if let Some((target, _)) = self.pickups.iter().find(|(t, _)| self.dialogues.knows(t)) {
            return Err(FictionError::Config(format!(
                "\"{target}\" is both a pickup and an NPC"
            )));
        }
        Ok(())
    }
}

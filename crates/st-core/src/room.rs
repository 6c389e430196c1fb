use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a room, e.g. `crashSite`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A node in the location graph.
///
/// The exit table is fixed once the world is built; only the item list
/// changes during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// The room's identifier.
    pub id: RoomId,
    /// Text shown when the player looks around or enters.
    pub description: String,
    exits: IndexMap<String, RoomId>,
    items: Vec<String>,
}

impl Room {
    /// Create a room with no exits and no items.
    pub fn new(id: impl Into<RoomId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            exits: IndexMap::new(),
            items: Vec::new(),
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<RoomId>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    /// Place an item in the room.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        let item = item.into();
        if !self.items.contains(&item) {
            self.items.push(item);
        }
        self
    }

    /// The room reached by going `direction`, if any.
    pub fn exit(&self, direction: &str) -> Option<&RoomId> {
        self.exits.get(direction)
    }

    /// All exits, in the order they were added.
    pub fn exits(&self) -> impl Iterator<Item = (&str, &RoomId)> {
        self.exits.iter().map(|(d, t)| (d.as_str(), t))
    }

    /// Items currently lying here, in placement order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether `item` is lying here.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Remove `item` from the room. Returns false if it was not here.
    pub(crate) fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}

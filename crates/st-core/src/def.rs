use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{WwError, WwResult};
use crate::room::RoomId;

/// Static definition of a single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDef {
    /// The room's identifier.
    pub id: RoomId,
    /// Description shown on `look` and on arrival.
    pub description: String,
    /// Direction name to target room, in authored order.
    #[serde(default)]
    pub exits: IndexMap<String, RoomId>,
    /// Items lying in the room at the start.
    #[serde(default)]
    pub items: Vec<String>,
}

impl RoomDef {
    /// Create a room definition with no exits and no items.
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

    /// Add a starting item.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// Static definition of a whole world: the rooms and the entry room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDef {
    /// The room the player starts in.
    pub start: RoomId,
    /// All rooms, in display order.
    pub rooms: Vec<RoomDef>,
}

impl WorldDef {
    /// Create an empty definition starting at `start`.
    pub fn new(start: impl Into<RoomId>) -> Self {
        Self {
            start: start.into(),
            rooms: Vec::new(),
        }
    }

    /// Add a room.
    pub fn with_room(mut self, room: RoomDef) -> Self {
        self.rooms.push(room);
        self
    }

    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> WwResult<Self> {
        serde_json::from_str(json).map_err(|e| WwError::Parse(e.to_string()))
    }

    /// Serialize the definition as pretty-printed JSON.
    pub fn to_json(&self) -> WwResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WwError::Parse(e.to_string()))
    }

    /// The crash-site demo: a wrecked ship, a forest, and a space bar.
    pub fn crash_site() -> Self {
        Self::new("crashSite")
            .with_room(
                RoomDef::new(
                    "crashSite",
                    "You are at the crash site of your spaceship. There is debris everywhere. \
                     To the north, you see a path leading to a dense forest.",
                )
                .with_exit("north", "forest")
                .with_item("wrench"),
            )
            .with_room(
                RoomDef::new(
                    "forest",
                    "You are in a dense forest. The trees are tall and the atmosphere is eerie. \
                     There is a path leading back to the south and another path leading east.",
                )
                .with_exit("south", "crashSite")
                .with_exit("east", "spaceBar"),
            )
            .with_room(
                RoomDef::new(
                    "spaceBar",
                    "You are in a seedy space bar. The place is filled with shady characters \
                     and the smell of alien drinks. There is a door to the west.",
                )
                .with_exit("west", "forest")
                .with_item("keycard"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crash_site_layout() {
        let def = WorldDef::crash_site();
        assert_eq!(def.start, RoomId::from("crashSite"));
        let ids: Vec<&str> = def.rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["crashSite", "forest", "spaceBar"]);
        assert_eq!(def.rooms[0].items, vec!["wrench".to_string()]);
    }

    #[test]
    fn json_round_trip() {
        let def = WorldDef::crash_site();
        let json = def.to_json().unwrap();
        assert_eq!(WorldDef::from_json(&json).unwrap(), def);
    }

    #[test]
    fn exits_and_items_default_to_empty() {
        let def = WorldDef::from_json(
            r#"{ "start": "cell", "rooms": [ { "id": "cell", "description": "Bare walls." } ] }"#,
        )
        .unwrap();
        assert!(def.rooms[0].exits.is_empty());
        assert!(def.rooms[0].items.is_empty());
    }

    #[test]
    fn exits_keep_json_order() {
        let def = WorldDef::from_json(
            r#"{ "start": "hub", "rooms": [ { "id": "hub", "description": "",
                 "exits": { "west": "hub", "east": "hub", "north": "hub" } } ] }"#,
        )
        .unwrap();
        let dirs: Vec<&str> = def.rooms[0].exits.keys().map(String::as_str).collect();
        assert_eq!(dirs, vec!["west", "east", "north"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WorldDef::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WwError::Parse(_)));
    }
}

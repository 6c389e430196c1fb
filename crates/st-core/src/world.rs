use std::collections::HashMap;

use log::debug;
use strsim::jaro_winkler;

use crate::def::WorldDef;
use crate::direction::normalize_direction;
use crate::error::{WwError, WwResult};
use crate::room::{Room, RoomId};

/// Minimum similarity for suggesting a room name in validation errors.
const SUGGEST_THRESHOLD: f64 = 0.8;

/// The world model: every room plus the room the player is standing in.
///
/// The room graph itself never changes after construction. Play only moves
/// the current-room pointer and takes items out of rooms.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
    current: usize,
}

impl World {
    /// Build and validate a world from its definition.
    ///
    /// Rejects empty worlds, duplicate room ids, an undefined start room,
    /// exits into undefined rooms, and items placed more than once.
    pub fn from_def(def: WorldDef) -> WwResult<Self> {
        if def.rooms.is_empty() {
            return Err(WwError::EmptyWorld);
        }

        let mut index = HashMap::new();
        for (i, room) in def.rooms.iter().enumerate() {
            if index.insert(room.id.clone(), i).is_some() {
                return Err(WwError::DuplicateRoom(room.id.clone()));
            }
        }

        for room in &def.rooms {
            for (direction, target) in &room.exits {
                if !index.contains_key(target) {
                    return Err(WwError::DanglingExit {
                        room: room.id.clone(),
                        direction: direction.clone(),
                        target: target.clone(),
                        suggestion: suggest_room(index.keys(), target),
                    });
                }
            }
        }

        let mut seen: HashMap<&str, &RoomId> = HashMap::new();
        for room in &def.rooms {
            for item in &room.items {
                if let Some(first) = seen.insert(item.as_str(), &room.id) {
                    return Err(WwError::DuplicateItem {
                        item: item.clone(),
                        first: first.clone(),
                        second: room.id.clone(),
                    });
                }
            }
        }

        let current = *index
            .get(&def.start)
            .ok_or_else(|| WwError::UnknownRoom(def.start.clone()))?;

        let rooms = def
            .rooms
            .into_iter()
            .map(|r| {
                let mut room = Room::new(r.id, r.description);
                for (direction, target) in r.exits {
                    room = room.with_exit(direction, target);
                }
                for item in r.items {
                    room = room.with_item(item);
                }
                room
            })
            .collect();

        Ok(Self {
            rooms,
            index,
            current,
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The room the player is in.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    /// The current room's identifier.
    pub fn current_room_id(&self) -> &RoomId {
        &self.current_room().id
    }

    /// Description of the room the player is in.
    pub fn describe_current_room(&self) -> &str {
        &self.current_room().description
    }

    /// Look up a room by identifier.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.index.get(id).map(|&i| &self.rooms[i])
    }

    /// All rooms in definition order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The room currently holding `item`, if any.
    pub fn item_location(&self, item: &str) -> Option<&RoomId> {
        self.rooms.iter().find(|r| r.has_item(item)).map(|r| &r.id)
    }

    /// Whether every exit of every room leads to a defined room.
    ///
    /// Always true for a world built by [`World::from_def`].
    pub fn is_closed(&self) -> bool {
        self.rooms
            .iter()
            .flat_map(|r| r.exits())
            .all(|(_, target)| self.index.contains_key(target))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Pick `item` up from the current room.
    ///
    /// Only removes it from the room; the caller is responsible for putting
    /// it somewhere else.
    pub fn take_item(&mut self, item: &str) -> WwResult<()> {
        let room = &mut self.rooms[self.current];
        if room.remove_item(item) {
            debug!("took {item} from {}", room.id);
            Ok(())
        } else {
            Err(WwError::ItemNotPresent(item.to_string()))
        }
    }

    /// Remove `item` from whichever room holds it.
    ///
    /// Returns the room it was taken from, or `None` if no room had it.
    pub fn claim_item(&mut self, item: &str) -> Option<RoomId> {
        let room = self.rooms.iter_mut().find(|r| r.has_item(item))?;
        room.remove_item(item);
        debug!("claimed {item} from {}", room.id);
        Some(room.id.clone())
    }

    /// Walk through the exit named `direction`.
    ///
    /// Abbreviations like `n` are accepted. On success the player is in the
    /// new room and its description is returned; otherwise nothing changes.
    pub fn move_to(&mut self, direction: &str) -> WwResult<&str> {
        let target = self
            .current_room()
            .exit(normalize_direction(direction))
            .ok_or_else(|| WwError::InvalidDirection(direction.to_string()))?;

        let next = *self
            .index
            .get(target)
            .ok_or_else(|| WwError::UnknownRoom(target.clone()))?;

        debug!("moved {direction} from {} to {}", self.current_room_id(), target);
        self.current = next;
        Ok(self.describe_current_room())
    }
}

fn suggest_room<'a>(
    candidates: impl Iterator<Item = &'a RoomId>,
    target: &RoomId,
) -> Option<RoomId> {
    let target_lower = target.as_str().to_lowercase();
    let mut best: Option<(&RoomId, f64)> = None;
    for candidate in candidates {
        let score = jaro_winkler(&target_lower, &candidate.as_str().to_lowercase());
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(id, _)| id.clone())
}

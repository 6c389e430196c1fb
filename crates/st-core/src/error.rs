use crate::room::RoomId;

/// Alias for `Result<T, WwError>`.
pub type WwResult<T> = Result<T, WwError>;

/// Errors that can occur when building or moving through a world.
///
/// The first two variants are player-facing: their `Display` output is the
/// exact line shown to the player. The rest are reported while validating a
/// world definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WwError {
    /// The current room has no exit in the requested direction.
    #[error("You can't go {0} from here.")]
    InvalidDirection(String),

    /// The requested item is not lying in the current room.
    #[error("There is no {0} here.")]
    ItemNotPresent(String),

    /// A room identifier does not name any defined room.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(RoomId),

    /// An exit points at a room that is not defined.
    #[error(
        "exit {direction} of room \"{room}\" leads to undefined room \"{target}\"{hint}",
        hint = suggestion_suffix(.suggestion)
    )]
    DanglingExit {
        /// The room that owns the exit.
        room: RoomId,
        /// The exit's direction name.
        direction: String,
        /// The undefined target.
        target: RoomId,
        /// The closest defined room name, if any is similar enough.
        suggestion: Option<RoomId>,
    },

    /// An item is placed in more than one room (or twice in one room).
    #[error("item \"{item}\" appears in both \"{first}\" and \"{second}\"")]
    DuplicateItem {
        /// The duplicated item.
        item: String,
        /// The room where the item was first seen.
        first: RoomId,
        /// The room where it was seen again.
        second: RoomId,
    },

    /// Two rooms share one identifier.
    #[error("room \"{0}\" is defined more than once")]
    DuplicateRoom(RoomId),

    /// The definition contains no rooms at all.
    #[error("world has no rooms")]
    EmptyWorld,

    /// The definition could not be parsed.
    #[error("invalid world definition: {0}")]
    Parse(String),
}

fn suggestion_suffix(suggestion: &Option<RoomId>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{s}\"?)"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_messages() {
        assert_eq!(
            WwError::InvalidDirection("west".into()).to_string(),
            "You can't go west from here."
        );
        assert_eq!(
            WwError::ItemNotPresent("spoon".into()).to_string(),
            "There is no spoon here."
        );
    }

    #[test]
    fn dangling_exit_with_suggestion() {
        let err = WwError::DanglingExit {
            room: RoomId::from("crashSite"),
            direction: "north".into(),
            target: RoomId::from("forrest"),
            suggestion: Some(RoomId::from("forest")),
        };
        let msg = err.to_string();
        assert!(msg.contains("undefined room \"forrest\""));
        assert!(msg.ends_with("(did you mean \"forest\"?)"));
    }
}

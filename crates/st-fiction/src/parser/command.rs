//! Command parsing for typed player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe the current room. Any object ("look at", "look around") is ignored.
    Look,
    /// Take an item from the current room.
    Take {
        /// The item name, verbatim.
        item: String,
    },
    /// Use a carried item.
    Use {
        /// The item name, verbatim.
        item: String,
    },
    /// Walk through an exit.
    Go {
        /// The direction, verbatim.
        direction: String,
    },
    /// List carried items.
    Inventory,
    /// Start a conversation with an NPC.
    Talk {
        /// The NPC identifier.
        npc: String,
    },
    /// Show the command summary.
    Help,
    /// Anything else.
    Unknown {
        /// The original input.
        input: String,
    },
}

impl Command {
    /// The lowercase verb this command was parsed from, for logging.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Take { .. } => "take",
            Self::Use { .. } => "use",
            Self::Go { .. } => "go",
            Self::Inventory => "inventory",
            Self::Talk { .. } => "talk",
            Self::Help => "help",
            Self::Unknown { .. } => "unknown",
        }
    }
}

const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];

/// Parse a line of player input into a command.
///
/// The verb is everything up to the first run of whitespace and is matched
/// case-insensitively. The rest of the line is the object and is kept as
/// typed. Unrecognized verbs keep the whole input for the error message.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    let (verb, object) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (trimmed, ""),
    };
    let verb = verb.to_lowercase();

    match verb.as_str() {
        "look" => Command::Look,
        "take" => Command::Take {
            item: object.to_string(),
        },
        "use" => Command::Use {
            item: object.to_string(),
        },
        "go" => Command::Go {
            direction: object.to_string(),
        },
        "talk" => Command::Talk {
            npc: object.to_string(),
        },
        "help" => Command::Help,
        v if INVENTORY_VERBS.contains(&v) => Command::Inventory,
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

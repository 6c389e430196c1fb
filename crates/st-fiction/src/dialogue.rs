//! Linear per-NPC dialogue.
//!
//! Each NPC has a fixed sequence of lines. Starting a conversation shows
//! the first line; every advance shows the next one until the sequence runs
//! out, after which the end marker is shown and further advances do
//! nothing. Only one conversation is active at a time.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FictionError, FictionResult};

/// Default text shown once a conversation has run out of lines.
pub const DEFAULT_END_MARKER: &str = "[End of conversation]";

/// Lines each NPC can say, keyed by NPC identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueTable {
    lines: BTreeMap<String, Vec<String>>,
}

impl DialogueTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the lines for an NPC.
    pub fn with_dialogue<I, S>(mut self, npc: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines
            .insert(npc.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// The lines for an NPC.
    pub fn lines(&self, npc: &str) -> Option<&[String]> {
        self.lines.get(npc).map(Vec::as_slice)
    }

    /// Whether the NPC has dialogue.
    pub fn knows(&self, npc: &str) -> bool {
        self.lines.contains_key(npc)
    }

    /// All NPC identifiers, sorted.
    pub fn npcs(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    /// Reject NPCs with no lines.
    pub fn validate(&self) -> FictionResult<()> {
        match self.lines.iter().find(|(_, lines)| lines.is_empty()) {
            Some((npc, _)) => Err(FictionError::Config(format!(
                "dialogue for \"{npc}\" has no lines"
            ))),
            None => Ok(()),
        }
    }

    /// The crash-site demo's bartender.
    pub fn crash_site() -> Self {
        Self::new().with_dialogue(
            "npc1",
            [
                "Hello, traveler!",
                "Not many ships make it through the asteroid belt in one piece.",
                "If you need a way off this rock, find the keycard to the hangar.",
            ],
        )
    }
}

/// Where the active conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueState {
    /// No conversation has been started.
    #[default]
    NotStarted,
    /// Showing the line at this index.
    ShowingLine(usize),
    /// All lines have been shown.
    Ended,
}

/// Steps through the active NPC's lines.
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    table: DialogueTable,
    end_marker: String,
    npc: Option<String>,
    state: DialogueState,
}

impl DialogueEngine {
    /// Create an engine over the given table.
    pub fn new(table: DialogueTable) -> Self {
        Self {
            table,
            end_marker: DEFAULT_END_MARKER.to_string(),
            npc: None,
            state: DialogueState::NotStarted,
        }
    }

    /// Set the text shown once a conversation has ended.
    pub fn with_end_marker(mut self, marker: impl Into<String>) -> Self {
        self.end_marker = marker.into();
        self
    }

    /// The dialogue table.
    pub fn table(&self) -> &DialogueTable {
        &self.table
    }

    /// Whether the NPC has dialogue.
    pub fn knows(&self, npc: &str) -> bool {
        self.table.knows(npc)
    }

    /// Current state of the active conversation.
    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// The NPC currently (or last) talked to.
    pub fn active_npc(&self) -> Option<&str> {
        self.npc.as_deref()
    }

    /// Whether a conversation is showing a line.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DialogueState::ShowingLine(_))
    }

    /// Start a conversation from its first line.
    ///
    /// Restarting, with the same NPC or another, always begins again at
    /// line 0. An NPC with no lines goes straight to the end marker. An
    /// unknown NPC leaves the state untouched.
    pub fn start(&mut self, npc: &str) -> FictionResult<&str> {
        let Some(lines) = self.table.lines(npc) else {
            return Err(FictionError::UnknownNpc(npc.to_string()));
        };
        debug!("dialogue started with {npc}");
        self.state = if lines.is_empty() {
            DialogueState::Ended
        } else {
            DialogueState::ShowingLine(0)
        };
        self.npc = Some(npc.to_string());
        Ok(self.current_text().unwrap_or(self.end_marker.as_str()))
    }

    /// Move to the next line.
    ///
    /// Returns the newly shown text, or `None` when there is nothing to
    /// advance (no conversation, or it has already ended).
    pub fn advance(&mut self) -> Option<&str> {
        let DialogueState::ShowingLine(i) = self.state else {
            return None;
        };
        let len = self.active_lines().map_or(0, <[String]>::len);
        self.state = if i + 1 < len {
            DialogueState::ShowingLine(i + 1)
        } else {
            debug!("dialogue ended");
            DialogueState::Ended
        };
        self.current_text()
    }

    /// The text currently on display: a line, the end marker, or nothing.
    pub fn current_text(&self) -> Option<&str> {
        match self.state {
            DialogueState::NotStarted => None,
            DialogueState::ShowingLine(i) => self
                .active_lines()
                .and_then(|lines| lines.get(i))
                .map(String::as_str),
            DialogueState::Ended => Some(self.end_marker.as_str()),
        }
    }

    fn active_lines(&self) -> Option<&[String]> {
        self.npc.as_deref().and_then(|npc| self.table.lines(npc))
    }
}

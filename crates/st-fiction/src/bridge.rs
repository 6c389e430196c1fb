//! Interaction events from the scene and the selection state they drive.
//!
//! The front end does all ray casting. By the time an event gets here it
//! already names the object that was hit (or nothing), so this module only
//! decides what the hit means for the game and remembers which objects are
//! selected or hovered, so the renderer can highlight them.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// The input device an interaction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    /// A tracked XR controller, by index.
    Controller(u8),
    /// The desktop mouse.
    Mouse,
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller(i) => write!(f, "controller {i}"),
            Self::Mouse => f.write_str("mouse"),
        }
    }
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// Trigger pressed while pointing at something.
    SelectStart,
    /// Trigger released.
    SelectEnd,
    /// Mouse click.
    Click,
}

/// An interaction reported by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Which pointer produced the event.
    pub source: Pointer,
    /// What happened.
    pub kind: InteractionKind,
    /// The scene object under the pointer, if the ray hit anything.
    pub target: Option<String>,
}

impl InteractionEvent {
    /// A trigger press on `target`.
    pub fn select(source: Pointer, target: impl Into<String>) -> Self {
        Self {
            source,
            kind: InteractionKind::SelectStart,
            target: Some(target.into()),
        }
    }

    /// A trigger release.
    pub fn release(source: Pointer) -> Self {
        Self {
            source,
            kind: InteractionKind::SelectEnd,
            target: None,
        }
    }

    /// A mouse click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self {
            source: Pointer::Mouse,
            kind: InteractionKind::Click,
            target: Some(target.into()),
        }
    }
}

/// Desktop or immersive presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Flat screen with mouse input.
    #[default]
    Desktop,
    /// Headset with tracked controllers.
    Immersive,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Desktop => Self::Immersive,
            Self::Immersive => Self::Desktop,
        }
    }
}

/// Scene objects that put an item in the inventory when selected.
///
/// Maps scene object identifier to item identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickupTable {
    entries: BTreeMap<String, String>,
}

impl PickupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `target` a pickup for `item`.
    pub fn with_pickup(mut self, target: impl Into<String>, item: impl Into<String>) -> Self {
        self.entries.insert(target.into(), item.into());
        self
    }

    /// The item picked up by selecting `target`.
    pub fn item_for(&self, target: &str) -> Option<&str> {
        self.entries.get(target).map(String::as_str)
    }

    /// All (target, item) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, i)| (t.as_str(), i.as_str()))
    }

    /// The crash-site demo's only pickup.
    pub fn crash_site() -> Self {
        Self::new().with_pickup("keycard", "keycard")
    }
}

/// What an interaction should do to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Put an item in the inventory.
    PickUp {
        /// The item.
        item: String,
    },
    /// Start talking to an NPC.
    Talk {
        /// The NPC.
        npc: String,
    },
    /// Describe the surroundings.
    Look,
}

/// Routes interactions and tracks selection and hover highlighting.
#[derive(Debug, Clone, Default)]
pub struct Bridge {
    pickups: PickupTable,
    selected: HashMap<Pointer, String>,
    highlighted: HashSet<String>,
    view_mode: ViewMode,
}

impl Bridge {
    /// Create a bridge with the given pickup table.
    pub fn new(pickups: PickupTable) -> Self {
        Self {
            pickups,
            ..Self::default()
        }
    }

    /// The pickup table.
    pub fn pickups(&self) -> &PickupTable {
        &self.pickups
    }

    /// Update selection state for `event` and decide what it does.
    ///
    /// `is_npc` answers whether a target has dialogue. A release clears the
    /// source's selection and never triggers an action; so does an event
    /// that hit nothing.
    pub fn route(
        &mut self,
        event: &InteractionEvent,
        is_npc: impl Fn(&str) -> bool,
    ) -> Option<Action> {
        match event.kind {
            InteractionKind::SelectEnd => {
                if let Some(target) = self.selected.remove(&event.source) {
                    debug!("{} released {target}", event.source);
                }
                None
            }
            InteractionKind::SelectStart | InteractionKind::Click => {
                let target = event.target.as_deref()?;
                if event.kind == InteractionKind::SelectStart {
                    debug!("{} selected {target}", event.source);
                    self.selected.insert(event.source, target.to_string());
                }

                let action = if let Some(item) = self.pickups.item_for(target) {
                    Action::PickUp {
                        item: item.to_string(),
                    }
                } else if is_npc(target) {
                    Action::Talk {
                        npc: target.to_string(),
                    }
                } else {
                    Action::Look
                };
                Some(action)
            }
        }
    }

    /// Whether any pointer is holding `target` selected.
    pub fn is_selected(&self, target: &str) -> bool {
        self.selected.values().any(|t| t == target)
    }

    /// The object a pointer is holding selected.
    pub fn selection(&self, source: Pointer) -> Option<&str> {
        self.selected.get(&source).map(String::as_str)
    }

    /// Mark `target` as under a pointer for this frame.
    pub fn hover(&mut self, target: impl Into<String>) {
        self.highlighted.insert(target.into());
    }

    /// Forget all hover highlights; called at the start of every frame.
    pub fn clear_hover(&mut self) {
        self.highlighted.clear();
    }

    /// Whether `target` is under a pointer this frame.
    pub fn is_highlighted(&self, target: &str) -> bool {
        self.highlighted.contains(target)
    }

    /// Current presentation mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch between desktop and immersive mode. Selections are dropped,
    /// since the pointers that made them go away.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.selected.clear();
        self.highlighted.clear();
        debug!("view mode now {:?}", self.view_mode);
        self.view_mode
    }
}

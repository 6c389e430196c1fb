//! Game session: one world, one inventory, one conversation.

use log::{debug, warn};
use st_core::World;

use crate::bridge::{Action, Bridge, InteractionEvent, ViewMode};
use crate::config::GameConfig;
use crate::dialogue::DialogueEngine;
use crate::error::{FictionError, FictionResult};
use crate::inventory::Inventory;
use crate::parser::{Command, parse_command};

const HELP_TEXT: &str = "Commands:\n\
    look - describe your surroundings\n\
    go <direction> - walk through an exit (north, south, east, west, ...)\n\
    take <item> - pick up an item\n\
    use <item> - use something you carry\n\
    inventory (or i) - list what you carry\n\
    talk <npc> - start a conversation\n\
    help - show this summary";

/// A sound for the front end to play alongside a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Something went into the inventory.
    Pickup,
    /// A conversation line appeared.
    Dialogue,
    /// The command could not be carried out.
    Denied,
}

impl SoundCue {
    /// Stable identifier for the sound asset.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dialogue => "dialogue",
            Self::Denied => "denied",
        }
    }
}

/// What a handler wants the front end to show and play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Text for the dialogue/room panel, if it changed.
    pub text: Option<String>,
    /// Sound to play, if any.
    pub sound: Option<SoundCue>,
}

impl Response {
    /// A response that changes nothing on screen.
    pub fn none() -> Self {
        Self::default()
    }

    /// A text-only response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sound: None,
        }
    }

    /// Attach a sound.
    pub fn with_sound(mut self, cue: SoundCue) -> Self {
        self.sound = Some(cue);
        self
    }
}

/// A running game.
///
/// All state lives here and changes only through the `on_*` handlers, each
/// of which runs to completion and hands back a [`Response`].
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    inventory: Inventory,
    dialogue: DialogueEngine,
    bridge: Bridge,
    display: String,
}

impl GameSession {
    /// Build a session from a configuration.
    pub fn new(config: GameConfig) -> FictionResult<Self> {
        config.validate()?;
        let world = World::from_def(config.world)?;

        for (target, item) in config.pickups.iter() {
            if world.item_location(item).is_none() {
                debug!("pickup {target} gives {item}, which no room holds");
            }
        }

        let display = world.describe_current_room().to_string();
        Ok(Self {
            world,
            inventory: Inventory::new(),
            dialogue: DialogueEngine::new(config.dialogues).with_end_marker(config.end_marker),
            bridge: Bridge::new(config.pickups),
            display,
        })
    }

    /// A session over the built-in crash-site demo.
    pub fn builtin() -> FictionResult<Self> {
        Self::new(GameConfig::builtin())
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The dialogue engine.
    pub fn dialogue(&self) -> &DialogueEngine {
        &self.dialogue
    }

    /// The interaction bridge.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    // -----------------------------------------------------------------------
    // Output surface
    // -----------------------------------------------------------------------

    /// Text currently in the dialogue/room panel.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Text for the inventory panel.
    pub fn inventory_text(&self) -> String {
        self.inventory.to_string()
    }

    /// Whether any pointer is holding `target` selected.
    pub fn is_selected(&self, target: &str) -> bool {
        self.bridge.is_selected(target)
    }

    /// Whether `target` is under a pointer this frame.
    pub fn is_highlighted(&self, target: &str) -> bool {
        self.bridge.is_highlighted(target)
    }

    /// Current presentation mode.
    pub fn view_mode(&self) -> ViewMode {
        self.bridge.view_mode()
    }

    // -----------------------------------------------------------------------
    // Handlers
    // -----------------------------------------------------------------------

    /// Handle a line of typed input.
    pub fn on_text_command(&mut self, input: &str) -> Response {
        let command = parse_command(input);
        self.respond(command)
    }

    /// Run a parsed command and return the text shown to the player.
    pub fn execute(&mut self, command: Command) -> String {
        self.respond(command).text.unwrap_or_default()
    }

    /// Handle a selection or click from the scene.
    pub fn on_interaction(&mut self, event: &InteractionEvent) -> Response {
        let dialogue = &self.dialogue;
        let Some(action) = self.bridge.route(event, |t| dialogue.knows(t)) else {
            return Response::none();
        };

        let response = match action {
            Action::PickUp { item } => self.pick_up(item),
            Action::Talk { npc } => match self.dialogue.start(&npc) {
                Ok(line) => Response::text(line).with_sound(SoundCue::Dialogue),
                Err(e) => {
                    warn!("interaction with {npc} ignored: {e}");
                    Response::none()
                }
            },
            Action::Look => Response::text(self.world.describe_current_room()),
        };
        self.show(response)
    }

    /// Handle the player asking for the next dialogue line.
    pub fn on_advance(&mut self) -> Response {
        let response = match self.dialogue.advance() {
            Some(text) => Response::text(text).with_sound(SoundCue::Dialogue),
            None => Response::none(),
        };
        self.show(response)
    }

    /// Mark the objects under the pointers for this frame.
    pub fn on_frame<I, S>(&mut self, hovered: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bridge.clear_hover();
        for target in hovered {
            self.bridge.hover(target);
        }
    }

    /// Switch between desktop and immersive mode.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.bridge.toggle_view_mode()
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    fn respond(&mut self, command: Command) -> Response {
        debug!("executing {}", command.verb());
        let response = match self.dispatch(command) {
            Ok(response) => response,
            Err(e) => Response::text(e.to_string()).with_sound(SoundCue::Denied),
        };
        self.show(response)
    }

    fn dispatch(&mut self, command: Command) -> FictionResult<Response> {
        match command {
            Command::Look => Ok(Response::text(self.world.describe_current_room())),
            Command::Take { item } => self.do_take(item),
            Command::Use { item } => self.do_use(&item),
            Command::Go { direction } => Ok(Response::text(self.world.move_to(&direction)?)),
            Command::Inventory => Ok(Response::text(self.inventory_text())),
            Command::Talk { npc } => {
                let line = self.dialogue.start(&npc)?;
                Ok(Response::text(line).with_sound(SoundCue::Dialogue))
            }
            Command::Help => Ok(Response::text(HELP_TEXT)),
            Command::Unknown { input } => Err(FictionError::UnknownCommand(input)),
        }
    }

    fn do_take(&mut self, item: String) -> FictionResult<Response> {
        self.world.take_item(&item)?;
        let text = format!("You take the {item}.");
        self.inventory.add(item);
        Ok(Response::text(text).with_sound(SoundCue::Pickup))
    }

    fn do_use(&self, item: &str) -> FictionResult<Response> {
        if self.inventory.contains(item) {
            Ok(Response::text(format!("You use the {item}.")))
        } else {
            Err(FictionError::ItemNotHeld(item.to_string()))
        }
    }

    fn pick_up(&mut self, item: String) -> Response {
        if self.inventory.contains(&item) {
            return Response::text(format!("You already have the {item}."));
        }
        if let Some(room) = self.world.claim_item(&item) {
            debug!("{item} picked up from {room}");
        }
        let text = format!("You pick up the {item}.");
        self.inventory.add(item);
        Response::text(text).with_sound(SoundCue::Pickup)
    }

    fn show(&mut self, response: Response) -> Response {
        if let Some(text) = &response.text {
            self.display.clone_from(text);
        }
        response
    }
}

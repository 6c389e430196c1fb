//! Front-end contract and the loop that drives it.
//!
//! A front end (a WebXR page, a desktop window, a terminal) owns rendering,
//! ray casting and audio. It feeds [`FrontendInput`]s in, and gets asked to
//! redraw and to play sounds. The session never calls back into it on its
//! own.

use st_core::RoomId;

use crate::bridge::{InteractionEvent, ViewMode};
use crate::session::{GameSession, Response, SoundCue};

/// Something the player did, as reported by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendInput {
    /// A typed command line.
    Text(String),
    /// A selection or click in the scene.
    Interaction(InteractionEvent),
    /// Start of a frame, with the objects currently under a pointer.
    Frame(Vec<String>),
    /// Show the next dialogue line.
    Advance,
    /// Switch between desktop and immersive mode.
    ToggleView,
    /// Leave the game.
    Quit,
}

/// A read-only view of the session handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    session: &'a GameSession,
    message: Option<&'a str>,
}

impl<'a> SceneView<'a> {
    /// A view of `session`, with the text produced by the last input.
    pub fn new(session: &'a GameSession, message: Option<&'a str>) -> Self {
        Self { session, message }
    }

    /// Text produced by the last input, if it produced any.
    pub fn message(&self) -> Option<&'a str> {
        self.message
    }

    /// Text in the dialogue/room panel.
    pub fn display_text(&self) -> &'a str {
        self.session.display_text()
    }

    /// Text for the inventory panel.
    pub fn inventory_text(&self) -> String {
        self.session.inventory_text()
    }

    /// The room the player is in.
    pub fn room(&self) -> &'a RoomId {
        self.session.world().current_room_id()
    }

    /// Whether `target` should be drawn as selected.
    pub fn is_selected(&self, target: &str) -> bool {
        self.session.is_selected(target)
    }

    /// Whether `target` should be drawn as hovered.
    pub fn is_highlighted(&self, target: &str) -> bool {
        self.session.is_highlighted(target)
    }

    /// Current presentation mode.
    pub fn view_mode(&self) -> ViewMode {
        self.session.view_mode()
    }
}

/// The external renderer, input source and audio player.
pub trait Frontend {
    /// Wait for the next input. `None` ends the game.
    fn next_input(&mut self) -> Option<FrontendInput>;

    /// Draw the scene and the text panels.
    fn render_scene(&mut self, view: &SceneView<'_>);

    /// Play a sound effect.
    fn play_sound(&mut self, cue: SoundCue);
}

/// Apply one input to the session. Returns `None` for [`FrontendInput::Quit`].
pub fn apply(session: &mut GameSession, input: FrontendInput) -> Option<Response> {
    let response = match input {
        FrontendInput::Text(line) => session.on_text_command(&line),
        FrontendInput::Interaction(event) => session.on_interaction(&event),
        FrontendInput::Frame(hovered) => {
            session.on_frame(hovered);
            Response::none()
        }
        FrontendInput::Advance => session.on_advance(),
        FrontendInput::ToggleView => {
            let mode = session.toggle_view_mode();
            Response::text(match mode {
                ViewMode::Desktop => "Desktop mode.",
                ViewMode::Immersive => "Immersive mode.",
            })
        }
        FrontendInput::Quit => return None,
    };
    Some(response)
}

/// Drive `session` from `frontend` until input runs out or the player quits.
///
/// Returns the number of inputs handled.
pub fn run<F: Frontend + ?Sized>(session: &mut GameSession, frontend: &mut F) -> usize {
    frontend.render_scene(&SceneView::new(session, Some(session.display_text())));

    let mut handled = 0;
    while let Some(input) = frontend.next_input() {
        let Some(response) = apply(session, input) else {
            break;
        };
        handled += 1;
        if let Some(cue) = response.sound {
            frontend.play_sound(cue);
        }
        frontend.render_scene(&SceneView::new(session, response.text.as_deref()));
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::Pointer;
    use std::collections::VecDeque;

    /// Scripted front end that records what it was asked to do.
    #[derive(Default)]
    struct Scripted {
        inputs: VecDeque<FrontendInput>,
        messages: Vec<Option<String>>,
        sounds: Vec<SoundCue>,
        selected_npc: Vec<bool>,
    }

    impl Scripted {
        fn new(inputs: Vec<FrontendInput>) -> Self {
            Self {
                inputs: inputs.into(),
                ..Self::default()
            }
        }
    }

    impl Frontend for Scripted {
        fn next_input(&mut self) -> Option<FrontendInput> {
            self.inputs.pop_front()
        }

        fn render_scene(&mut self, view: &SceneView<'_>) {
            self.messages.push(view.message().map(str::to_string));
            self.selected_npc.push(view.is_selected("npc1"));
        }

        fn play_sound(&mut self, cue: SoundCue) {
            self.sounds.push(cue);
        }
    }

    #[test]
    fn runs_until_input_ends() {
        let mut session = GameSession::builtin().unwrap();
        let mut frontend = Scripted::new(vec![
            FrontendInput::Text("take wrench".into()),
            FrontendInput::Text("go north".into()),
        ]);

        assert_eq!(run(&mut session, &mut frontend), 2);
        assert_eq!(frontend.messages.len(), 3);
        assert_eq!(frontend.messages[1].as_deref(), Some("You take the wrench."));
        assert_eq!(frontend.sounds, vec![SoundCue::Pickup]);
        assert_eq!(session.world().current_room_id().as_str(), "forest");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = GameSession::builtin().unwrap();
        let mut frontend = Scripted::new(vec![
            FrontendInput::Quit,
            FrontendInput::Text("go north".into()),
        ]);

        assert_eq!(run(&mut session, &mut frontend), 0);
        assert_eq!(session.world().current_room_id().as_str(), "crashSite");
    }

    #[test]
    fn renderer_sees_selection() {
        let mut session = GameSession::builtin().unwrap();
        let mut frontend = Scripted::new(vec![
            FrontendInput::Interaction(InteractionEvent::select(Pointer::Controller(0), "npc1")),
            FrontendInput::Advance,
            FrontendInput::Interaction(InteractionEvent::release(Pointer::Controller(0))),
        ]);

        run(&mut session, &mut frontend);
        assert_eq!(frontend.selected_npc, vec![false, true, true, false]);
        assert_eq!(frontend.sounds, vec![SoundCue::Dialogue, SoundCue::Dialogue]);
        assert_eq!(frontend.messages[3], None);
    }

    #[test]
    fn toggle_view_reports_mode() {
        let mut session = GameSession::builtin().unwrap();
        let response = apply(&mut session, FrontendInput::ToggleView).unwrap();
        assert_eq!(response.text.as_deref(), Some("Immersive mode."));
        assert_eq!(session.view_mode(), ViewMode::Immersive);
    }
}

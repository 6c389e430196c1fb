//! Terminal front end: typed commands plus `:`-prefixed scene events.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use log::{info, warn};
use st_fiction::{
    Frontend, FrontendInput, GameSession, InteractionEvent, Pointer, SceneView, SoundCue,
};

const EVENT_HELP: &str = "Scene events:\n  \
    :select <target> [hand]  press the trigger on <target> (hand 0 or 1)\n  \
    :release [hand]          release the trigger\n  \
    :click <target>          click <target> with the mouse\n  \
    :hover <target>...       point at targets for one frame\n  \
    :next                    show the next dialogue line\n  \
    :vr                      toggle immersive mode\n  \
    :quit                    leave the game";

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(world)?;
    let mut session = GameSession::new(config).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut frontend = TerminalFrontend::new(stdin.lock(), io::stdout());
    let handled = st_fiction::run(&mut session, &mut frontend);
    info!("session ended after {handled} inputs");
    Ok(())
}

/// A front end that reads lines and prints responses.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    last_inventory: String,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            last_inventory: String::new(),
        }
    }

    fn read_line(&mut self) -> Option<String> {
        write!(self.output, "{} ", ">".bold()).ok();
        self.output.flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("failed to read input: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn next_input(&mut self) -> Option<FrontendInput> {
        loop {
            let line = self.read_line()?;
            match parse_input(&line) {
                Ok(input) => return Some(input),
                Err(msg) => {
                    writeln!(self.output, "{}", msg.yellow()).ok();
                }
            }
        }
    }

    fn render_scene(&mut self, view: &SceneView<'_>) {
        if let Some(message) = view.message() {
            writeln!(self.output, "{message}").ok();
        }
        let inventory = view.inventory_text();
        if inventory != self.last_inventory {
            writeln!(self.output, "{}", inventory.dimmed()).ok();
            self.last_inventory = inventory;
        }
    }

    fn play_sound(&mut self, cue: SoundCue) {
        writeln!(self.output, "{}", format!("*{}*", cue.id()).italic()).ok();
    }
}

/// Turn one line of terminal input into a front-end input.
///
/// Plain lines are game commands. Lines starting with `:` stand in for
/// what a 3D front end would report from its controllers.
fn parse_input(line: &str) -> Result<FrontendInput, String> {
    let trimmed = line.trim();
    if matches!(trimmed, "quit" | "exit") {
        return Ok(FrontendInput::Quit);
    }
    let Some(event) = trimmed.strip_prefix(':') else {
        return Ok(FrontendInput::Text(line.to_string()));
    };

    let mut words = event.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match (name, args.as_slice()) {
        ("select", [target]) => Ok(FrontendInput::Interaction(InteractionEvent::select(
            Pointer::Controller(0),
            *target,
        ))),
        ("select", [target, hand]) => Ok(FrontendInput::Interaction(InteractionEvent::select(
            parse_hand(hand)?,
            *target,
        ))),
        ("release", []) => Ok(FrontendInput::Interaction(InteractionEvent::release(
            Pointer::Controller(0),
        ))),
        ("release", [hand]) => Ok(FrontendInput::Interaction(InteractionEvent::release(
            parse_hand(hand)?,
        ))),
        ("click", [target]) => Ok(FrontendInput::Interaction(InteractionEvent::click(*target))),
        ("hover", targets) => Ok(FrontendInput::Frame(
            targets.iter().map(|t| t.to_string()).collect(),
        )),
        ("next", []) => Ok(FrontendInput::Advance),
        ("vr", []) => Ok(FrontendInput::ToggleView),
        ("quit", []) => Ok(FrontendInput::Quit),
        _ => Err(format!("unknown scene event \":{event}\"\n{EVENT_HELP}")),
    }
}

fn parse_hand(hand: &str) -> Result<Pointer, String> {
    match hand {
        "0" | "left" => Ok(Pointer::Controller(0)),
        "1" | "right" => Ok(Pointer::Controller(1)),
        _ => Err(format!("unknown hand \"{hand}\" (use 0 or 1)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_fiction::InteractionKind;

    #[test]
    fn plain_lines_are_commands() {
        assert_eq!(
            parse_input("take wrench"),
            Ok(FrontendInput::Text("take wrench".into()))
        );
        assert_eq!(parse_input("quit"), Ok(FrontendInput::Quit));
    }

    #[test]
    fn select_with_hand() {
        let Ok(FrontendInput::Interaction(event)) = parse_input(":select npc1 1") else {
            panic!("expected interaction");
        };
        assert_eq!(event.source, Pointer::Controller(1));
        assert_eq!(event.kind, InteractionKind::SelectStart);
        assert_eq!(event.target.as_deref(), Some("npc1"));
    }

    #[test]
    fn scene_events() {
        assert_eq!(parse_input(":next"), Ok(FrontendInput::Advance));
        assert_eq!(parse_input(":vr"), Ok(FrontendInput::ToggleView));
        assert_eq!(
            parse_input(":hover npc1 keycard"),
            Ok(FrontendInput::Frame(vec!["npc1".into(), "keycard".into()]))
        );
        assert_eq!(
            parse_input(":click keycard"),
            Ok(FrontendInput::Interaction(InteractionEvent::click("keycard")))
        );
    }

    #[test]
    fn bad_events_are_rejected() {
        assert!(parse_input(":dance").is_err());
        assert!(parse_input(":select npc1 7").is_err());
    }

    #[test]
    fn terminal_session_transcript() {
        colored::control::set_override(false);
        let input = b"take wrench\n:select npc1\n:next\nquit\ngo north\n";
        let mut output = Vec::new();
        let mut session = GameSession::builtin().unwrap();
        {
            let mut frontend = TerminalFrontend::new(&input[..], &mut output);
            st_fiction::run(&mut session, &mut frontend);
        }
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("You take the wrench."));
        assert!(text.contains("Inventory: wrench"));
        assert!(text.contains("*pickup*"));
        assert!(text.contains("Hello, traveler!"));
        assert_eq!(session.world().current_room_id().as_str(), "crashSite");
    }
}

//! Interactive play loop.
//!
//! The session is the presentation layer: it turns input lines into
//! engine calls and redraws whenever the engine reports a change.

use crate::command::{Command, HELP};
use crate::config::DisplayConfig;
use crate::render;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use timetravel_tictactoe::{EngineEvent, GameEngine, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// A game driven from text input.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    config: DisplayConfig,
    dirty: Rc<Cell<bool>>,
}

impl Session {
    /// Creates a session and starts a new game.
    #[instrument(skip(config))]
    pub fn new(config: DisplayConfig) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);

        let mut engine = GameEngine::new();
        engine.subscribe(Box::new(move |event: &EngineEvent, _: &GameEngine| {
            debug!(?event, "Redraw requested");
            flag.set(true);
        }));
        engine.new_game();

        Self {
            engine,
            config,
            dirty,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handles one input line, writing any messages and redraws to `out`.
    #[instrument(skip(self, out))]
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Control> {
        if line.trim().is_empty() {
            return Ok(Control::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Control::Continue);
            }
        };

        match command {
            Command::Play(position) => {
                if let MoveOutcome::Ignored(reason) = self.engine.apply_position(position)? {
                    writeln!(out, "{}", reason)?;
                }
            }
            Command::Jump(step) => {
                if let Err(e) = self.engine.jump_to(step) {
                    warn!(%e, "Rejected jump");
                    writeln!(out, "{}", e)?;
                }
            }
            Command::New => self.engine.new_game(),
            Command::History => write!(out, "{}", render::history(&self.engine.moves()))?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {
                info!("Quitting");
                return Ok(Control::Quit);
            }
        }

        self.redraw_if_dirty(out)?;
        Ok(Control::Continue)
    }

    /// Reads lines from `input` until EOF or `quit`.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        self.redraw_if_dirty(out)?;
        write!(out, "{}", render::prompt(self.engine.to_move()))?;
        out.flush()?;

        for line in input.lines() {
            if self.handle_line(&line?, out)? == Control::Quit {
                break;
            }
            write!(out, "{}", render::prompt(self.engine.to_move()))?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn redraw_if_dirty(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        if self.dirty.replace(false) {
            write!(out, "{}", render::frame(&self.engine.view(), &self.config))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::{Player, Status};

    fn play(lines: &[&str]) -> (Session, String) {
        let mut session = Session::new(DisplayConfig::default());
        let mut out = Vec::new();
        let input = lines.join("\n");
        session.run(input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_plays_to_win() {
        let (session, out) = play(&["0", "4", "1", "3", "2"]);
        assert_eq!(session.engine().status(), Status::Winner(Player::X));
        assert!(out.contains("Winner: X"));
    }

    #[test]
    fn test_occupied_square_is_reported_without_redraw() {
        let mut session = Session::new(DisplayConfig::default());
        let mut out = Vec::new();
        session.handle_line("4", &mut out).unwrap();
        out.clear();

        session.handle_line("center", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Square Center is already occupied\n");
        assert_eq!(session.engine().len(), 2);
    }

    #[test]
    fn test_jump_and_branch() {
        let (session, _) = play(&["0", "4", "1", "jump 1", "8"]);
        assert_eq!(session.engine().len(), 3);
        assert_eq!(session.engine().status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_bad_jump_is_reported() {
        let (session, out) = play(&["jump 5"]);
        assert_eq!(session.engine().cursor(), 0);
        assert!(out.contains("Step 5 is out of range"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = play(&["0", "quit", "4"]);
        assert_eq!(session.engine().len(), 2);
    }

    #[test]
    fn test_unknown_command_continues() {
        let (session, out) = play(&["dance", "4"]);
        assert!(out.contains("Unknown command"));
        assert_eq!(session.engine().len(), 2);
    }
}

//! Interactive commands read from stdin.

use derive_more::{Display, Error};
use timetravel_tictactoe::Position;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a cell.
    Play(Position),
    /// Click a history entry.
    Jump(usize),
    /// Start over.
    New,
    /// Print the history list.
    History,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that did not parse as a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing recognizable on the line.
    #[display("Unknown command: {:?} (type 'help')", _0)]
    Unknown(#[error(not(source))] String),
    /// `jump` without a valid step number.
    #[display("Usage: jump <step>")]
    MissingStep,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  0-8 or a cell name (e.g. 'center', 'top left')  place a mark
  jump <n> | goto <n>                             jump to history step n
  new                                             start a new game
  history                                         list history steps
  help                                            show this text
  quit                                            exit";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();

        match head.as_str() {
            "jump" | "goto" => words
                .next()
                .and_then(|n| n.parse().ok())
                .map(Command::Jump)
                .ok_or(CommandError::MissingStep),
            "new" | "restart" => Ok(Command::New),
            "history" | "moves" => Ok(Command::History),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Position::from_label_or_number(line)
                .map(Command::Play)
                .ok_or_else(|| CommandError::Unknown(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!("4".parse::<Command>(), Ok(Command::Play(Position::Center)));
        assert_eq!(" top left ".parse::<Command>(), Ok(Command::Play(Position::TopLeft)));
    }

    #[test]
    fn test_parse_jump() {
        assert_eq!("jump 3".parse::<Command>(), Ok(Command::Jump(3)));
        assert_eq!("GOTO 0".parse::<Command>(), Ok(Command::Jump(0)));
        assert_eq!("jump".parse::<Command>(), Err(CommandError::MissingStep));
        assert_eq!("jump x".parse::<Command>(), Err(CommandError::MissingStep));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("new".parse::<Command>(), Ok(Command::New));
        assert_eq!("history".parse::<Command>(), Ok(Command::History));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "9".parse::<Command>(),
            Err(CommandError::Unknown("9".to_string()))
        );
        assert!("dance".parse::<Command>().is_err());
    }
}

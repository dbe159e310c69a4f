//! Core domain types for tic-tac-toe.

use super::error::EngineError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player to move after `moves_made` marks have been placed.
    pub fn for_move_count(moves_made: usize) -> Self {
        if moves_made % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Single-character symbol for the mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true for an occupied square.
    pub fn is_occupied(self) -> bool {
        matches!(self, Square::Occupied(_))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values. Placing a mark produces a new board and leaves
/// the original untouched, so snapshots recorded in history never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from a slice of exactly nine squares.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidBoardLength` for any other length.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: &[Square]) -> Result<Self, EngineError> {
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| EngineError::InvalidBoardLength(squares.len()))?;
        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// Callers are responsible for checking the square is empty first.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_occupied()).count()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Player to move, derived from the number of marks on the board.
    pub fn to_move(&self) -> Player {
        Player::for_move_count(self.occupied_count())
    }

    /// Formats the board as a grid, drawing empty squares with `empty`.
    pub fn render(&self, empty: impl Fn(Position) -> char) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => empty(pos),
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Square; 9]> for Board {
    fn from(squares: [Square; 9]) -> Self {
        Self { squares }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(|_| '.'))
    }
}

/// Parses nine cells: `X`/`x`, `O`/`o`, or `.`, `-`, `_`, space for empty.
/// Row separators (`/`, `|`, newlines) are skipped.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for (index, character) in s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .enumerate()
        {
            let square = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                _ => return Err(EngineError::InvalidCharacter { character, index }),
            };
            squares.push(square);
        }
        Self::from_squares(&squares)
    }
}

/// Phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_from_squares_rejects_wrong_length() {
        let result = Board::from_squares(&[Square::Empty; 8]);
        assert_eq!(result, Err(EngineError::InvalidBoardLength(8)));

        let result = Board::from_squares(&[Square::Empty; 10]);
        assert_eq!(result, Err(EngineError::InvalidBoardLength(10)));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let result = "XOZ......".parse::<Board>();
        assert_eq!(
            result,
            Err(EngineError::InvalidCharacter {
                character: 'Z',
                index: 2
            })
        );
    }

    #[test]
    fn test_parse_rejects_short_board() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(EngineError::InvalidBoardLength(2))
        );
    }

    #[test]
    fn test_to_move_follows_parity() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        let board = board.with_mark(Position::Center, Player::X);
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    fn test_render_numbers_empty_squares() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        let numbered = board.render(|pos| char::from(b'1' + pos.to_index() as u8));
        assert_eq!(numbered, "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.");
    }
}

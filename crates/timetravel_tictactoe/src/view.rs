//! Render-ready snapshot of the engine for the presentation layer.

use super::history::HistoryEntry;
use super::rules;
use super::status::Status;
use super::{Board, GameEngine, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Everything a stateless renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Mark in each cell, row-major; `None` for empty.
    pub squares: [Option<Player>; 9],
    /// Status of the displayed board.
    pub status: Status,
    /// `status` as display text.
    pub status_text: String,
    /// Completed line, if the board is won.
    pub winning_line: Option<[Position; 3]>,
    /// Cursor into `moves`.
    pub cursor: usize,
    /// History rows, oldest first.
    pub moves: Vec<HistoryEntry>,
}

impl GameView {
    /// Captures the engine's displayed state.
    pub fn of(engine: &GameEngine) -> Self {
        let board = engine.current();
        let status = Status::of(board);
        let squares = *board.squares();
        Self {
            squares: squares.map(Square::player),
            status,
            status_text: status.to_string(),
            winning_line: rules::winning_line(board).map(|(_, line)| line),
            cursor: engine.cursor(),
            moves: engine.moves(),
        }
    }

    /// Board rebuilt from the captured squares.
    pub fn board(&self) -> Board {
        Board::from(self.squares.map(|square| square.map_or(Square::Empty, Square::Occupied)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_won_game() {
        let engine = GameEngine::replay(&[0, 4, 1, 3, 2]).unwrap();
        let view = engine.view();
        assert_eq!(view.status_text, "Winner: X");
        assert_eq!(
            view.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(view.squares[4], Some(Player::O));
        assert_eq!(view.squares[8], None);
        assert_eq!(view.moves.len(), 6);
        assert!(view.moves[5].is_current);
    }

    #[test]
    fn test_view_board_matches_engine() {
        let engine = GameEngine::replay(&[4, 0, 8]).unwrap();
        assert_eq!(engine.view().board(), *engine.current());
    }

    #[test]
    fn test_view_after_jump_marks_current_entry() {
        let mut engine = GameEngine::replay(&[0, 4, 1]).unwrap();
        engine.jump_to(1).unwrap();
        let view = engine.view();
        assert_eq!(view.cursor, 1);
        assert_eq!(view.status_text, "Next player: O");
        let current: Vec<_> = view.moves.iter().filter(|m| m.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].label, "Go to move #1");
    }
}

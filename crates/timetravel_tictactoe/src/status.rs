//! Derived status of a board.

use super::rules;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the presentation layer shows above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game continues; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full with no complete line.
    #[display("Draw")]
    Draw,
}

impl Status {
    /// Computes the status of `board`.
    ///
    /// The next player is derived from the number of marks on the board.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = rules::calculate_winner(board) {
            Status::Winner(winner)
        } else if rules::is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(board.to_move())
        }
    }

    /// State machine phase for this status.
    pub fn phase(self) -> GameStatus {
        match self {
            Status::NextPlayer(_) => GameStatus::InProgress,
            Status::Winner(player) => GameStatus::Won(player),
            Status::Draw => GameStatus::Draw,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(player),
            _ => None,
        }
    }
}

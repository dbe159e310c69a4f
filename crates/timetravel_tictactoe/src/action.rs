//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each history step
//! after the first records the move that produced it.

use super::status::Status;
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was ignored.
///
/// An ignored move behaves like a click on a disabled control: the
/// engine state is unchanged and nothing is reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the cursor already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Result of [`crate::GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was accepted and appended to history.
    Applied {
        /// History step holding the new board.
        step: usize,
        /// The move that was made.
        action: Move,
        /// Status of the new board.
        status: Status,
    },
    /// The move was a no-op.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true when the move changed the engine.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

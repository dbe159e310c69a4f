//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! A failed precondition is not an error here; it yields the
//! [`IgnoreReason`] the engine reports for a no-op move.

use super::action::IgnoreReason;
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::{Board, GameEngine, Position, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: The board must not already have a winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` when a line is complete.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), IgnoreReason> {
        match rules::calculate_winner(board) {
            Some(_) => Err(IgnoreReason::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` when the square holds a mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), IgnoreReason> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(position))
        }
    }
}

/// Composite precondition: no winner yet and the square is empty.
///
/// The winner check runs first, so a click on an occupied square of a
/// won board reports `GameOver`.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), IgnoreReason> {
        GameNotOver::check(board)?;
        SquareIsEmpty::check(board, position)?;
        Ok(())
    }
}

/// Contract for placing a mark at the cursor.
///
/// Preconditions:
/// - Board at the cursor has no winner
/// - Square is empty
///
/// Postconditions:
/// - History is monotonic
/// - Players still alternate
/// - Cursor points at the new last step
/// - No move follows a won board
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(engine: &GameEngine, position: &Position) -> Result<(), IgnoreReason> {
        LegalMove::check(engine.current(), *position)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), EngineError> {
        if after.cursor() != before.cursor() + 1 || !after.is_at_latest() {
            warn!(
                before = before.cursor(),
                after = after.cursor(),
                "Cursor did not advance to the new step"
            );
            return Err(EngineError::InvariantViolation(
                "Postcondition failed: cursor must point at the appended step".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Runs the full invariant set, folding violations into one error.
#[instrument(skip(engine))]
pub fn check_invariants(engine: &GameEngine) -> Result<(), EngineError> {
    EngineInvariants::check_all(engine).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Invariant check failed");
        EngineError::InvariantViolation(descriptions)
    })
}

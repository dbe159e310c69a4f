//! Engine error types.
//!
//! Only programming errors are errors here. A click on an occupied
//! square or a finished game is an ignored action, see
//! [`crate::MoveOutcome::Ignored`].

use derive_more::{Display, Error};

/// Integration fault raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// `jump_to` with a step past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// Board built from a slice that is not nine squares long.
    #[display("Board must have exactly 9 squares, got {}", _0)]
    InvalidBoardLength(#[error(not(source))] usize),

    /// Unrecognized cell character while parsing a board.
    #[display("Invalid character {:?} at cell {}", character, index)]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Cell index it was read into.
        index: usize,
    },

    /// A state invariant failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

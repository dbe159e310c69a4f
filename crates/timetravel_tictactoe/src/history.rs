//! Snapshot history with branching.

use super::action::Move;
use super::error::EngineError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded point in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Board after this step.
    pub board: Board,
    /// Move that produced the board; `None` for the game start.
    pub action: Option<Move>,
}

impl Step {
    /// The all-empty starting step.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            action: None,
        }
    }
}

/// Ordered board snapshots from game start to the furthest move made.
///
/// Never empty: index 0 is always the starting step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) steps: Vec<Step>,
}

impl History {
    /// History holding only the starting step.
    pub fn new() -> Self {
        Self {
            steps: vec![Step::start()],
        }
    }

    /// Rebuilds a history from raw steps.
    ///
    /// # Errors
    ///
    /// Empty input is rejected with `InvariantViolation`. Further checks
    /// are the caller's job, see [`crate::invariants`].
    pub fn from_steps(steps: Vec<Step>) -> Result<Self, EngineError> {
        if steps.is_empty() {
            return Err(EngineError::InvariantViolation(
                "History must contain the starting step".to_string(),
            ));
        }
        Ok(Self { steps })
    }

    /// Number of recorded steps (at least 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a well-formed history.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Step at `index`, failing with `StepOutOfRange`.
    pub fn step(&self, index: usize) -> Result<&Step, EngineError> {
        self.steps.get(index).ok_or(EngineError::StepOutOfRange {
            step: index,
            len: self.steps.len(),
        })
    }

    /// Latest recorded step.
    pub fn last(&self) -> &Step {
        // Non-empty by construction.
        &self.steps[self.steps.len() - 1]
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Drops every step after `cursor`, then appends `step`.
    ///
    /// Returns the index of the appended step.
    #[instrument(skip(self, step), fields(len = self.steps.len()))]
    pub fn branch_from(&mut self, cursor: usize, step: Step) -> usize {
        let keep = (cursor + 1).min(self.steps.len());
        if keep < self.steps.len() {
            debug!(
                discarded = self.steps.len() - keep,
                "Discarding future steps"
            );
        }
        self.steps.truncate(keep);
        self.steps.push(step);
        self.steps.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// A history row as rendered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Step index, passed back to `jump_to`.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// Move recorded at this step.
    pub action: Option<Move>,
    /// True for the step under the cursor.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Label for `step`: `"Go to game start"` or `"Go to move #n"`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn step_with(board: Board, player: Player, position: Position) -> Step {
        Step {
            board: board.with_mark(position, player),
            action: Some(Move::new(player, position)),
        }
    }

    #[test]
    fn test_new_history_has_start() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), &Step::start());
    }

    #[test]
    fn test_branch_from_latest_appends() {
        let mut history = History::new();
        let first = step_with(Board::new(), Player::X, Position::Center);
        assert_eq!(history.branch_from(0, first), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_branch_from_earlier_truncates() {
        let mut history = History::new();
        let a = step_with(Board::new(), Player::X, Position::Center);
        let b = step_with(a.board, Player::O, Position::TopLeft);
        history.branch_from(0, a);
        history.branch_from(1, b);
        assert_eq!(history.len(), 3);

        let c = step_with(Board::new(), Player::X, Position::BottomRight);
        assert_eq!(history.branch_from(0, c), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), &c);
    }

    #[test]
    fn test_step_out_of_range() {
        let history = History::new();
        assert_eq!(
            history.step(3),
            Err(EngineError::StepOutOfRange { step: 3, len: 1 })
        );
    }

    #[test]
    fn test_from_steps_rejects_empty() {
        assert!(History::from_steps(Vec::new()).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(HistoryEntry::label_for(0), "Go to game start");
        assert_eq!(HistoryEntry::label_for(3), "Go to move #3");
    }
}

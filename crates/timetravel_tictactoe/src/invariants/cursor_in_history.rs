//! Cursor invariant: history starts empty and the cursor points into it.

use super::super::history::Step;
use super::super::GameEngine;
use super::Invariant;

/// Invariant: History is non-empty, starts at the empty board, and the
/// cursor indexes an existing step.
pub struct CursorInHistoryInvariant;

impl Invariant<GameEngine> for CursorInHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let steps = engine.history().steps();
        steps.first() == Some(&Step::start()) && engine.cursor() < steps.len()
    }

    fn description() -> &'static str {
        "History begins with the empty board and contains the cursor"
    }
}

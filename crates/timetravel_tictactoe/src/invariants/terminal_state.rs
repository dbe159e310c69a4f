//! Terminal state invariant: nothing is played after a win.

use super::super::{GameEngine, rules};
use super::Invariant;

/// Invariant: A board with a winner is the last step of history.
pub struct TerminalStateInvariant;

impl Invariant<GameEngine> for TerminalStateInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Some((_, earlier)) = engine.history().steps().split_last() else {
            return false;
        };
        earlier
            .iter()
            .all(|step| rules::calculate_winner(&step.board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}

//! Monotonic history invariant: squares once filled are never changed.

use super::super::{GameEngine, Square};
use super::Invariant;

/// Invariant: each step adds exactly one mark to the previous board.
///
/// The added mark sits where the recorded move says, carries the
/// recorded player, and no previously occupied square changes.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameEngine> for MonotonicHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().steps().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(action) = after.action else {
                return false;
            };

            let mut added = 0;
            for (old, new) in before.board.squares().iter().zip(after.board.squares()) {
                match (old, new) {
                    (Square::Occupied(_), _) if old != new => return false,
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => {}
                }
            }

            added == 1
                && before.board.is_empty(action.position)
                && after.board.get(action.position) == Square::Occupied(action.player)
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark and never alters an occupied square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicHistoryInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let engine = GameEngine::replay(&[0, 4, 1, 3, 2]).unwrap();
        assert!(MonotonicHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::replay(&[4, 0]).unwrap();
        let last = engine.history.steps.len() - 1;
        // O overwrites X in the center instead of playing top-left.
        engine.history.steps[last].board = engine.history.steps[last - 1]
            .board
            .with_mark(Position::Center, Player::O);
        assert!(!MonotonicHistoryInvariant::holds(&engine));
    }
}

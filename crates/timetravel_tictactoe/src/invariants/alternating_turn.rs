//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns starting with X.
///
/// Step `k` holds `k` marks, X owns `ceil(k / 2)` of them, and the move
/// recorded at step `k` was made by the player whose turn it was after
/// `k - 1` moves. The turn derived from the cursor's parity must agree
/// with the turn derived from the current board.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let steps_alternate = engine.history().steps().iter().enumerate().all(|(k, step)| {
            let marks_match = step.board.occupied_count() == k
                && step.board.count(Player::X) == k.div_ceil(2);
            let mover_matches = match step.action {
                None => k == 0,
                Some(action) => k > 0 && action.player == Player::for_move_count(k - 1),
            };
            marks_match && mover_matches
        });

        let turn_matches = engine
            .history()
            .get(engine.cursor())
            .is_some_and(|step| step.board.to_move() == engine.to_move());

        steps_alternate && turn_matches
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let engine = GameEngine::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameEngine::replay(&[0, 4]).unwrap();
        let last = engine.history.steps.len() - 1;
        let previous = engine.history.steps[last - 1].board;
        // X plays twice in a row.
        engine.history.steps[last].board = previous.with_mark(Position::Center, Player::X);
        engine.history.steps[last].action = Some(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}

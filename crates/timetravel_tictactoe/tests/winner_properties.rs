//! Property tests for win detection and move application.

use proptest::prelude::*;
use timetravel_tictactoe::contracts::check_invariants;
use timetravel_tictactoe::rules::LINES;
use timetravel_tictactoe::{Board, GameEngine, Player, Square, calculate_winner};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec(square(), 9).prop_map(|squares| {
        Board::from_squares(&squares).expect("strategy yields nine squares")
    })
}

fn first_complete_line(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| match board.get(*a) {
        Square::Occupied(p) if board.get(*b) == board.get(*a) && board.get(*c) == board.get(*a) => {
            Some(p)
        }
        _ => None,
    })
}

proptest! {
    #[test]
    fn winner_requires_a_complete_line(board in board()) {
        prop_assert_eq!(calculate_winner(&board), first_complete_line(&board));
    }

    #[test]
    fn random_play_keeps_invariants(cells in prop::collection::vec(0usize..9, 0..30)) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let len_before = engine.len();
            let applied = engine.apply_move(cell).expect("cell in range").is_applied();
            prop_assert_eq!(engine.len(), if applied { len_before + 1 } else { len_before });
            prop_assert!(check_invariants(&engine).is_ok());
        }
    }

    #[test]
    fn jump_then_move_truncates(
        cells in prop::collection::vec(0usize..9, 1..9),
        pick in any::<prop::sample::Index>(),
        next in 0usize..9,
    ) {
        let mut engine = GameEngine::replay(&cells).expect("cells in range");
        let step = pick.index(engine.len());
        engine.jump_to(step).expect("step in range");
        prop_assert_eq!(engine.to_move(), engine.current().to_move());

        if engine.apply_move(next).expect("cell in range").is_applied() {
            prop_assert_eq!(engine.len(), step + 2);
            prop_assert!(engine.is_at_latest());
        } else {
            prop_assert_eq!(engine.cursor(), step);
        }
    }
}

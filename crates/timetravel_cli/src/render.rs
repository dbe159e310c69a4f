//! Text rendering of a [`GameView`].

use crate::config::DisplayConfig;
use timetravel_tictactoe::{GameView, HistoryEntry, Player};

/// Draws the board grid and status line.
pub fn board(view: &GameView, config: &DisplayConfig) -> String {
    let number_empty = *config.number_empty();
    let mut out = view.board().render(|pos| {
        if number_empty {
            char::from(b'1' + pos.to_index() as u8)
        } else {
            '.'
        }
    });
    out.push('\n');
    out.push_str(&view.status_text);
    out.push('\n');
    out
}

/// Draws the history list, marking the current step.
pub fn history(moves: &[HistoryEntry]) -> String {
    moves
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { '>' } else { ' ' };
            match entry.action {
                Some(action) => format!(
                    "{} {:>2}. {} ({} at {})\n",
                    marker,
                    entry.step,
                    entry.label,
                    action.player,
                    action.position
                ),
                None => format!("{} {:>2}. {}\n", marker, entry.step, entry.label),
            }
        })
        .collect()
}

/// Full frame: board, status, and history if enabled.
pub fn frame(view: &GameView, config: &DisplayConfig) -> String {
    let mut out = board(view, config);
    if *config.show_history() {
        out.push_str(&history(&view.moves));
    }
    out
}

/// Prompt shown before reading a command.
pub fn prompt(to_move: Player) -> String {
    format!("{} > ", to_move)
}

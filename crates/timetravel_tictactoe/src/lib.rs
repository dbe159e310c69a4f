//! Time-travel tic-tac-toe engine.
//!
//! A single [`GameEngine`] owns every board the game has passed through
//! and a cursor into that history. A presentation layer drives it:
//!
//! - [`GameEngine::new_game`] once at startup,
//! - [`GameEngine::apply_move`] per cell click,
//! - [`GameEngine::jump_to`] per history button,
//!
//! and redraws from [`GameEngine::view`] whenever an [`EngineObserver`]
//! is notified.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameEngine, Player, Status};
//!
//! # fn main() -> Result<(), timetravel_tictactoe::EngineError> {
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     engine.apply_move(cell)?;
//! }
//! assert_eq!(engine.status(), Status::Winner(Player::X));
//!
//! // Go back two moves and play somewhere else.
//! engine.jump_to(3)?;
//! engine.apply_move(8)?;
//! assert_eq!(engine.len(), 5);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod history;
mod position;
mod status;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{IgnoreReason, Move, MoveOutcome};
pub use engine::{EngineEvent, EngineObserver, GameEngine};
pub use error::EngineError;
pub use history::{History, HistoryEntry, Step};
pub use position::Position;
pub use rules::calculate_winner;
pub use status::Status;
pub use types::{Board, GameStatus, Player, Square};
pub use view::GameView;

/// Alias matching the glossary: a cell holds a player's mark.
pub type Mark = Player;

//! The game engine: history, cursor, and move application.

use super::action::{Move, MoveOutcome};
use super::contracts::{self, Contract, MoveContract};
use super::error::EngineError;
use super::history::{History, HistoryEntry, Step};
use super::rules;
use super::status::Status;
use super::types::{Board, GameStatus, Player};
use super::view::GameView;
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// State change reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// History was reset to the empty board.
    NewGame,
    /// A move was appended at `step`.
    MoveApplied {
        /// History step of the new board.
        step: usize,
        /// The move that was made.
        action: Move,
        /// Status of the new board.
        status: Status,
    },
    /// The cursor moved without changing history.
    Jumped {
        /// Cursor before the jump.
        from: usize,
        /// Cursor after the jump.
        to: usize,
    },
}

/// Receives engine notifications, typically to trigger a redraw.
///
/// Observers are called after the state change is complete, with
/// read access to the engine.
pub trait EngineObserver {
    /// Called once per state change.
    fn on_event(&mut self, event: &EngineEvent, engine: &GameEngine);
}

impl<F> EngineObserver for F
where
    F: FnMut(&EngineEvent, &GameEngine),
{
    fn on_event(&mut self, event: &EngineEvent, engine: &GameEngine) {
        self(event, engine)
    }
}

/// Owns the game history and the cursor into it.
///
/// The board at the cursor is the one displayed and played from. The
/// player to move is derived from the cursor: after `k` moves it is X
/// when `k` is even and O otherwise.
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            observers: Vec::new(),
        }
    }

    /// Rebuilds an engine from a recorded history and cursor.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the history is not a legal
    /// sequence of alternating moves, continues after a win, or the
    /// cursor is out of range.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_parts(history: History, cursor: usize) -> Result<Self, EngineError> {
        let engine = Self {
            history,
            cursor,
            observers: Vec::new(),
        };
        contracts::check_invariants(&engine)?;
        Ok(engine)
    }

    /// Builds an engine by applying cell indices in order.
    ///
    /// Ignored moves stay ignored, exactly as they would during play.
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfRange` for any index above 8.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for &index in indices {
            engine.apply_move(index)?;
        }
        Ok(engine)
    }

    /// Registers an observer for state changes.
    pub fn subscribe(&mut self, observer: Box<dyn EngineObserver>) {
        self.observers.push(observer);
    }

    /// Resets history to the empty board and the cursor to 0.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.history = History::new();
        self.cursor = 0;
        info!("New game");
        self.notify(EngineEvent::NewGame);
    }

    /// Places the current player's mark at cell `index` of the board at
    /// the cursor.
    ///
    /// If the board already has a winner or the cell is occupied, nothing
    /// changes and `MoveOutcome::Ignored` is returned. Otherwise any steps
    /// after the cursor are discarded, the new board is appended, and the
    /// cursor moves to it.
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfRange` for an index above 8.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        let position = Position::try_from_index(index)?;
        self.apply_position(position)
    }

    /// [`GameEngine::apply_move`] with a typed position.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if a postcondition fails (debug builds).
    /// History and cursor are then restored to their state before the call
    /// and no observer is notified.
    #[instrument(skip(self), fields(cursor = self.cursor, player = ?self.to_move()))]
    pub fn apply_position(&mut self, position: Position) -> Result<MoveOutcome, EngineError> {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "Ignoring move");
            return Ok(MoveOutcome::Ignored(reason));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.to_move(), position);
        let board = self.current().with_mark(position, action.player);
        self.cursor = self.history.branch_from(
            self.cursor,
            Step {
                board,
                action: Some(action),
            },
        );

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            tracing::warn!(%err, "Rolling back move");
            self.history = before.history;
            self.cursor = before.cursor;
            return Err(err);
        }

        let status = Status::of(&board);
        info!(step = self.cursor, %action, %status, "Move applied");
        self.notify(EngineEvent::MoveApplied {
            step: self.cursor,
            action,
            status,
        });

        Ok(MoveOutcome::Applied {
            step: self.cursor,
            action,
            status,
        })
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns `StepOutOfRange` if `step >= self.len()`.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        self.history.step(step)?;
        let from = self.cursor;
        self.cursor = step;
        debug!(from, to = step, "Jumped");
        self.notify(EngineEvent::Jumped { from, to: step });
        Ok(())
    }

    /// Board at the cursor.
    pub fn current(&self) -> &Board {
        // The cursor always indexes an existing step.
        &self.history.steps()[self.cursor].board
    }

    /// Cursor position in history.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Full history, including steps after the cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of history steps (at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history holds at least the starting step.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when the cursor is on the most recent step.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// Player to move at the cursor, from the cursor's parity.
    pub fn to_move(&self) -> Player {
        Player::for_move_count(self.cursor)
    }

    /// Winner of the board at the cursor.
    pub fn winner(&self) -> Option<Player> {
        rules::calculate_winner(self.current())
    }

    /// Status of the board at the cursor.
    pub fn status(&self) -> Status {
        Status::of(self.current())
    }

    /// State machine phase at the cursor.
    pub fn phase(&self) -> GameStatus {
        self.status().phase()
    }

    /// History rows for the presentation layer.
    pub fn moves(&self) -> Vec<HistoryEntry> {
        self.history
            .steps()
            .iter()
            .enumerate()
            .map(|(step, s)| HistoryEntry {
                step,
                label: HistoryEntry::label_for(step),
                action: s.action,
                is_current: step == self.cursor,
            })
            .collect()
    }

    /// Everything needed to draw the game.
    pub fn view(&self) -> GameView {
        GameView::of(self)
    }

    fn notify(&mut self, event: EngineEvent) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer.on_event(&event, self);
        }
        self.observers = observers;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones game state only; observers stay with the original.
impl Clone for GameEngine {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
            cursor: self.cursor,
            observers: Vec::new(),
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("history", &self.history)
            .field("cursor", &self.cursor)
            .field("observers", &self.observers.len())
            .finish()
    }
}

//! A playable game: one engine wired to the history store.

use tictactoe_engine::{GameEngine, GameRecord, Mode, Position};
use tracing::{debug, info, instrument, warn};

use crate::history::{HistoryEntry, HistoryError, HistoryStore};

/// Owns the game engine and persists every finished game.
///
/// The presentation layer forwards clicks here and renders from
/// [`GameSession::engine`] afterwards.
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    store: HistoryStore,
    last_ai_reply: Option<Position>,
    save_error: Option<String>,
}

impl GameSession {
    /// Creates a session from an engine and a store.
    #[instrument(skip(engine, store), fields(path = %store.path().display()))]
    pub fn new(engine: GameEngine, store: HistoryStore) -> Self {
        info!(mode = engine.mode().label(), "Creating GameSession");
        Self {
            engine,
            store,
            last_ai_reply: None,
            save_error: None,
        }
    }

    /// Returns the engine for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the history store.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Returns the cell the AI took on the last click, if any.
    pub fn last_ai_reply(&self) -> Option<Position> {
        self.last_ai_reply
    }

    /// Returns the message of the last failed save, if the finished game
    /// could not be written.
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) {
        self.engine.select_mode(mode);
        self.clear_feedback();
    }

    /// Starts a fresh game under the current mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset();
        self.clear_feedback();
    }

    /// Handles a click on `(row, col)`.
    ///
    /// Illegal clicks are ignored. When the click finishes the game, the
    /// record is appended to the store and returned.
    #[instrument(skip(self))]
    pub fn click(&mut self, row: usize, col: usize) -> Option<GameRecord> {
        let outcome = match self.engine.make_move(row, col) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                return None;
            }
        };

        self.last_ai_reply = *outcome.ai_reply();
        let record = outcome.into_record()?;

        match self.store.append(&record) {
            Ok(()) => {
                info!(result = %record.result(), "Finished game saved");
                self.save_error = None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to save finished game");
                self.save_error = Some(e.message);
            }
        }
        Some(record)
    }

    /// One-line status: whose turn it is, or how the game ended.
    pub fn status_message(&self) -> String {
        if self.engine.is_over() {
            return self.engine.result().to_string();
        }
        let turn = format!("Player {}'s turn", self.engine.current_player());
        match self.last_ai_reply {
            Some(pos) => format!("AI played {}. {}", pos.label(), turn),
            None => turn,
        }
    }

    /// Loads the stored games for display.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the history file is unreadable or malformed.
    #[instrument(skip(self))]
    pub fn history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.store.list()
    }

    fn clear_feedback(&mut self) {
        self.last_ai_reply = None;
        self.save_error = None;
    }
}

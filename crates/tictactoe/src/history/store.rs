//! JSON file store for finished games.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tictactoe_engine::GameRecord;
use tracing::{debug, info, instrument};

use crate::history::{HistoryEntry, HistoryError};

/// Default history file, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "tic_tac_toe_games.json";

/// Append-only list of finished games backed by one JSON file.
///
/// Every append reads the whole file and rewrites it. A single writer is
/// assumed; nothing guards against concurrent processes.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store for the file at `path`. The file is not touched yet.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating HistoryStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all stored games in append order.
    ///
    /// A missing or blank file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the file cannot be read or is not a JSON
    /// array of game records.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<GameRecord>, HistoryError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if text.trim().is_empty() {
            debug!("History file is blank");
            return Ok(Vec::new());
        }

        let records: Vec<GameRecord> = serde_json::from_str(&text)?;
        debug!(count = records.len(), "History loaded");
        Ok(records)
    }

    /// Appends `record` and rewrites the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the existing file cannot be loaded (it is
    /// then left untouched) or the new contents cannot be written.
    #[instrument(skip(self, record), fields(path = %self.path.display(), result = %record.result()))]
    pub fn append(&self, record: &GameRecord) -> Result<(), HistoryError> {
        let mut records = self.load()?;
        records.push(record.clone());

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|e| HistoryError::new(format!("Failed to encode history: {}", e)))?;

        std::fs::write(&self.path, buf)?;
        info!(count = records.len(), "Game appended to history");
        Ok(())
    }

    /// Lists stored games with 1-based display indices.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] under the same conditions as [`HistoryStore::load`].
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self
            .load()?
            .into_iter()
            .enumerate()
            .map(|(i, record)| HistoryEntry::new(i + 1, record))
            .collect())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

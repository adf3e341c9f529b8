//! Display models for stored games.

use derive_getters::Getters;
use derive_new::new;
use tictactoe_engine::GameRecord;

/// A stored game paired with its 1-based position in the history.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct HistoryEntry {
    index: usize,
    record: GameRecord,
}

impl HistoryEntry {
    /// Heading line, e.g. `Game 3: It's a draw!`.
    pub fn title(&self) -> String {
        format!("Game {}: {}", self.index, self.record.result())
    }

    /// Heading followed by the three board rows.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title()];
        lines.extend(self.record.board_lines());
        lines
    }
}

/// Shown instead of a listing when nothing has been stored yet.
pub const NO_GAMES_MESSAGE: &str = "No previous games found.";

/// Lines for a full history listing: each game's heading and board rows.
pub fn listing_lines(entries: &[HistoryEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NO_GAMES_MESSAGE.to_string()];
    }
    entries.iter().flat_map(HistoryEntry::lines).collect()
}

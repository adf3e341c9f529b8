//! Persistence for finished games: an append-only JSON array in one file.

mod error;
mod models;
mod store;

pub use error::HistoryError;
pub use models::{HistoryEntry, NO_GAMES_MESSAGE, listing_lines};
pub use store::{DEFAULT_HISTORY_FILE, HistoryStore};

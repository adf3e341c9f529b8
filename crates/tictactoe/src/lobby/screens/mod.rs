//! Screen implementations for the lobby state machine.

mod board;
mod history_view;
mod mode_select;

pub use board::BoardScreen;
pub use history_view::HistoryViewScreen;
pub use mode_select::ModeSelectScreen;

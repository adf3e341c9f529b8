//! Lobby system with the mode menu, game board, and history screens.

mod controller;
mod input;
mod screen;
mod screens;

pub use controller::LobbyController;
pub use screen::{Screen, ScreenKind, ScreenTransition};
pub use screens::{BoardScreen, HistoryViewScreen, ModeSelectScreen};

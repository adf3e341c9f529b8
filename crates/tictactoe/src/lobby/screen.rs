//! Screen trait and transition type for the lobby state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::GameSession;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`LobbyController`](crate::LobbyController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the mode selection menu (starts a fresh game state).
    GoToModeSelect,
    /// Navigate to the board for the current game.
    GoToBoard,
    /// Navigate to the list of previously finished games.
    GoToHistory,
    /// Exit the application cleanly.
    Quit,
}

/// Which screen the controller is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Mode selection menu.
    ModeSelect,
    /// The game board.
    Board,
    /// Previously finished games.
    History,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own view state, renders from the session, and
/// handles key events. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &GameSession);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition;
}

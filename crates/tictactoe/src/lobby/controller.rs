//! Lobby controller: the state machine driving the multi-screen TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::GameSession;
use crate::lobby::screen::{Screen, ScreenKind, ScreenTransition};
use crate::lobby::screens::{BoardScreen, HistoryViewScreen, ModeSelectScreen};

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    ModeSelect(ModeSelectScreen),
    Board(BoardScreen),
    History(HistoryViewScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::ModeSelect(s) => s,
            Self::Board(s) => s,
            Self::History(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::ModeSelect(s) => s,
            Self::Board(s) => s,
            Self::History(s) => s,
        }
    }

    fn kind(&self) -> ScreenKind {
        match self {
            Self::ModeSelect(_) => ScreenKind::ModeSelect,
            Self::Board(_) => ScreenKind::Board,
            Self::History(_) => ScreenKind::History,
        }
    }
}

/// Controller that owns the game session and drives screen transitions.
///
/// The reset key is handled here, before the active screen sees the event,
/// so it restarts the game from every screen.
///
/// Call [`LobbyController::run`] to start the event loop.
#[derive(Debug)]
pub struct LobbyController {
    session: GameSession,
    reset_key: char,
    screen: ActiveScreen,
}

impl LobbyController {
    /// Creates a controller showing the mode selection menu.
    #[instrument(skip(session))]
    pub fn new(session: GameSession, reset_key: char) -> Self {
        info!("Creating LobbyController");
        Self {
            session,
            reset_key,
            screen: ActiveScreen::ModeSelect(ModeSelectScreen::new()),
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns which screen is currently shown.
    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame, &self.session);
    }

    /// Handles one key event. Returns `false` once the user has quit.
    #[instrument(skip(self), fields(key = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // crossterm fires both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return true;
        }

        let transition = if self.is_reset_key(&key) {
            info!(screen = ?self.screen.kind(), "Reset key pressed");
            self.session.reset();
            self.screen = ActiveScreen::Board(BoardScreen::new(self.reset_key));
            ScreenTransition::Stay
        } else {
            self.screen
                .as_screen_mut()
                .handle_key(key, &mut self.session)
        };

        self.apply_transition(transition)
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && !self.handle_key(key)
            {
                info!("Lobby quitting");
                return Ok(());
            }
        }
    }

    fn is_reset_key(&self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&self.reset_key))
    }

    /// Applies a screen transition. Returns `false` on quit.
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToModeSelect => {
                // Leaving a game abandons it.
                self.session.reset();
                self.screen = ActiveScreen::ModeSelect(ModeSelectScreen::new());
            }
            ScreenTransition::GoToBoard => {
                self.screen = ActiveScreen::Board(BoardScreen::new(self.reset_key));
            }
            ScreenTransition::GoToHistory => {
                self.screen = ActiveScreen::History(HistoryViewScreen::new(&self.session));
            }
            ScreenTransition::Quit => return false,
        }
        true
    }
}

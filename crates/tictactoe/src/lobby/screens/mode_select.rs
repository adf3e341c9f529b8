//! Mode selection menu, the hub shown at start-up.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_engine::Mode;
use tracing::{debug, info, instrument};

use crate::GameSession;
use crate::lobby::screen::{Screen, ScreenTransition};

/// Menu options available on the mode selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(Mode),
    ViewHistory,
    Quit,
}

impl MenuOption {
    fn label(self) -> &'static str {
        match self {
            Self::Play(mode) => mode.label(),
            Self::ViewHistory => "View Previous Games",
            Self::Quit => "Quit",
        }
    }

    fn all() -> Vec<MenuOption> {
        Mode::iter()
            .map(Self::Play)
            .chain([Self::ViewHistory, Self::Quit])
            .collect()
    }
}

/// State for the mode selection screen.
#[derive(Debug)]
pub struct ModeSelectScreen {
    options: Vec<MenuOption>,
    list_state: ListState,
}

impl ModeSelectScreen {
    /// Creates the menu with the first option highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing ModeSelectScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            options: MenuOption::all(),
            list_state: state,
        }
    }

    /// Moves selection up, wrapping to the bottom.
    fn select_previous(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down, wrapping to the top.
    fn select_next(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        self.options[idx.min(self.options.len() - 1)]
    }
}

impl Default for ModeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ModeSelectScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Choose Game Mode")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip_all, fields(key = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::Play(mode) => {
                        session.select_mode(mode);
                        ScreenTransition::GoToBoard
                    }
                    MenuOption::ViewHistory => ScreenTransition::GoToHistory,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

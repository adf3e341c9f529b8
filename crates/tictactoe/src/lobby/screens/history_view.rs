//! History screen listing every finished game with its final board.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::GameSession;
use crate::history::listing_lines;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the history screen, loaded once when the screen opens.
#[derive(Debug)]
pub struct HistoryViewScreen {
    lines: Result<Vec<String>, String>,
    scroll: u16,
}

impl HistoryViewScreen {
    /// Creates the screen, reading the history file immediately.
    #[instrument(skip(session))]
    pub fn new(session: &GameSession) -> Self {
        debug!("Initializing HistoryViewScreen");
        let lines = match session.history() {
            Ok(entries) => {
                info!(games = entries.len(), "HistoryViewScreen initialized");
                Ok(listing_lines(&entries))
            }
            Err(e) => {
                warn!(error = %e, "Could not read history");
                Err(e.message)
            }
        };
        Self { lines, scroll: 0 }
    }

    /// Returns the listing lines, or the load error message.
    pub fn lines(&self) -> Result<&[String], &str> {
        match &self.lines {
            Ok(lines) => Ok(lines),
            Err(message) => Err(message),
        }
    }

    /// Returns the first visible line of the listing.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn max_scroll(&self) -> u16 {
        match &self.lines {
            Ok(lines) => u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX),
            Err(_) => 0,
        }
    }
}

impl Screen for HistoryViewScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!(
            "Previous Games ({})",
            session.store().path().display()
        ))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body = match &self.lines {
            Ok(lines) => Paragraph::new(
                lines
                    .iter()
                    .map(|l| {
                        if l.starts_with("Game ") {
                            Line::styled(l.as_str(), Style::default().fg(Color::Yellow))
                        } else {
                            Line::from(l.as_str())
                        }
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(message) => Paragraph::new(format!("Could not read history: {}", message))
                .style(Style::default().fg(Color::Red)),
        };
        let body = body
            .alignment(Alignment::Center)
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::ALL).title("History"));
        frame.render_widget(body, chunks[1]);

        let help = Paragraph::new("↑↓: Scroll | Esc / b: Back to Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip_all, fields(key = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to menu from history");
                ScreenTransition::GoToModeSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

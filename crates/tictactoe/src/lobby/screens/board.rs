//! Board screen where the game is played.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Board, Cell, Position};
use tracing::{debug, info, instrument};

use crate::GameSession;
use crate::lobby::input::move_cursor;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the board screen: the keyboard cursor.
#[derive(Debug)]
pub struct BoardScreen {
    cursor: Position,
    reset_key: char,
}

impl BoardScreen {
    /// Creates the board screen with the cursor on the center cell.
    #[instrument]
    pub fn new(reset_key: char) -> Self {
        debug!("Initializing BoardScreen");
        Self {
            cursor: Position::Center,
            reset_key,
        }
    }

    /// Returns the cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn play(&mut self, pos: Position, session: &mut GameSession) {
        self.cursor = pos;
        if let Some(record) = session.click(pos.row(), pos.col()) {
            info!(result = %record.result(), "Game over");
        }
    }
}

impl Screen for BoardScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let engine = session.engine();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Board
                Constraint::Length(3), // Status
                Constraint::Length(3), // Help
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("Tic Tac Toe: {}", engine.mode().label()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let cursor = (!engine.is_over()).then_some(self.cursor);
        draw_board(frame, chunks[1], engine.board(), cursor);

        let (status, color) = match session.save_error() {
            Some(err) => (
                format!("{} (not saved: {})", session.status_message(), err),
                Color::Red,
            ),
            None if engine.is_over() => (session.status_message(), Color::Green),
            None => (session.status_message(), Color::Yellow),
        };
        let status = Paragraph::new(status)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        let help_text = if engine.is_over() {
            format!(
                "Press '{}' to play again | Esc: Menu | q: Quit",
                self.reset_key
            )
        } else {
            format!(
                "Arrows: Move | Enter: Place | 1-9: Place | {}: Restart | Esc: Menu | q: Quit",
                self.reset_key
            )
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip_all, fields(key = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor, session);
                ScreenTransition::Stay
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.play(pos, session);
                }
                ScreenTransition::Stay
            }
            KeyCode::Esc => ScreenTransition::GoToModeSelect,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::X => (" X ".to_string(), Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::O => (" O ".to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

//! Tests for GameSession: clicks, persistence and status text.

use tempfile::TempDir;
use tictactoe::{
    Cell, GameEngine, GameResult, GameSession, HistoryStore, Mode, Player, Position,
    RandomOpponent,
};

fn session(dir: &TempDir, mode: Mode) -> GameSession {
    let engine = GameEngine::with_opponent(mode, Box::new(RandomOpponent::seeded(42)));
    GameSession::new(engine, HistoryStore::new(dir.path().join("games.json")))
}

#[test]
fn test_finished_game_is_saved() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvP);

    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        assert!(session.click(row, col).is_none());
    }
    assert!(session.history().unwrap().is_empty());

    let record = session.click(0, 2).expect("winning click returns the record");
    assert_eq!(record.result(), "Player X wins!");
    assert_eq!(session.status_message(), "Player X wins!");
    assert_eq!(session.save_error(), None);

    let history = session.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].record(), &record);
}

#[test]
fn test_illegal_clicks_are_ignored() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvP);

    session.click(1, 1);
    let before = session.engine().board().clone();

    assert!(session.click(1, 1).is_none());
    assert!(session.click(3, 0).is_none());
    assert_eq!(session.engine().board(), &before);
    assert_eq!(session.engine().current_player(), Player::O);
}

#[test]
fn test_clicks_after_game_over_do_nothing() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvP);
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        session.click(row, col);
    }

    assert!(session.click(2, 2).is_none());
    assert_eq!(session.engine().board().get(Position::BottomRight), Cell::Empty);
    assert_eq!(session.history().unwrap().len(), 1);
}

#[test]
fn test_ai_replies_in_pvai() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvAI);

    session.click(1, 1);

    let reply = session.last_ai_reply().expect("AI answers the first move");
    assert_eq!(session.engine().board().get(reply), Cell::O);
    assert_eq!(session.engine().board().count(Player::O), 1);
    assert_eq!(session.engine().current_player(), Player::X);
    assert_eq!(
        session.status_message(),
        format!("AI played {}. Player X's turn", reply.label())
    );
}

#[test]
fn test_pvai_games_are_saved_once() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvAI);

    let mut records = 0;
    while !session.engine().is_over() {
        let pos = session.engine().valid_moves()[0];
        if session.click(pos.row(), pos.col()).is_some() {
            records += 1;
        }
    }

    assert_eq!(records, 1);
    let history = session.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].record().result(), &session.engine().result().to_string());
}

#[test]
fn test_reset_clears_board_and_feedback() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvAI);
    session.click(0, 0);

    session.reset();

    assert_eq!(session.engine().mode(), Mode::PvAI);
    assert_eq!(session.engine().result(), GameResult::InProgress);
    assert_eq!(session.engine().board().empty_positions().len(), 9);
    assert_eq!(session.last_ai_reply(), None);
    assert_eq!(session.status_message(), "Player X's turn");
}

#[test]
fn test_select_mode_starts_fresh_game() {
    let dir = TempDir::new().unwrap();
    let mut session = session(&dir, Mode::PvP);
    session.click(0, 0);

    session.select_mode(Mode::PvAI);

    assert_eq!(session.engine().mode(), Mode::PvAI);
    assert_eq!(session.engine().board().empty_positions().len(), 9);
}

#[test]
fn test_save_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("games.json");
    std::fs::write(&path, "not json").unwrap();
    let mut session = GameSession::new(GameEngine::new(Mode::PvP), HistoryStore::new(&path));

    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        session.click(row, col);
    }
    assert!(session.click(0, 2).is_some());

    let err = session.save_error().expect("save failure is surfaced");
    assert!(err.starts_with("Malformed history file"), "{}", err);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");

    session.reset();
    assert_eq!(session.save_error(), None);
}

//! Tests for the finished-game record format.

use serde_json::json;
use tictactoe_engine::{Board, Cell, GameEngine, GameRecord, GameResult, Mode, Player};

#[test]
fn test_record_json_shape() {
    let mut engine = GameEngine::new(Mode::PvP);
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
        engine.make_move(row, col).unwrap();
    }
    let record = GameRecord::new(engine.board(), engine.result());

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [["X", "X", "X"], ["O", "O", " "], [" ", " ", " "]],
            "result": "Player X wins!"
        })
    );
}

#[test]
fn test_record_reads_stored_format() {
    let text = r#"{
        "board": [["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]],
        "result": "It's a draw!"
    }"#;
    let record: GameRecord = serde_json::from_str(text).unwrap();
    assert_eq!(record.result(), "It's a draw!");
    assert_eq!(record.board()[0], [Cell::X, Cell::O, Cell::X]);
    assert_eq!(
        record.board_lines(),
        vec!["X | O | X", "X | O | O", "O | X | X"]
    );
}

#[test]
fn test_unknown_cell_symbol_is_rejected() {
    let text = r#"{"board": [["Z", " ", " "], [" ", " ", " "], [" ", " ", " "]], "result": "?"}"#;
    assert!(serde_json::from_str::<GameRecord>(text).is_err());
}

#[test]
fn test_record_snapshot_is_detached_from_board() {
    let board = Board::from_rows([[Cell::O; 3]; 3]);
    let record = GameRecord::new(&board, GameResult::Win(Player::O));
    assert_eq!(record.board(), &[[Cell::O; 3]; 3]);
    assert_eq!(record.result(), "Player O wins!");
}

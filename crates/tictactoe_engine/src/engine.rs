//! The game engine: board, turn, mode and result behind one mutable value.
//!
//! The presentation layer owns a single [`GameEngine`] and re-renders from its
//! read-only accessors after every call. Moves are synchronous: in
//! [`Mode::PvAI`] the opponent's reply is applied before
//! [`GameEngine::make_move`] returns.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::{
    Board, Cell, GameRecord, GameResult, Mode, MoveError, Opponent, Player, Position,
    RandomOpponent, rules,
};

/// What a successful [`GameEngine::make_move`] did beyond placing the mark.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct MoveOutcome {
    /// Cell taken by the computer opponent in reply, if it moved.
    ai_reply: Option<Position>,
    /// Snapshot of the finished game, present when this call ended it.
    record: Option<GameRecord>,
}

impl MoveOutcome {
    /// Consumes the outcome, returning the finished-game record if any.
    pub fn into_record(self) -> Option<GameRecord> {
        self.record
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    mode: Mode,
    result: GameResult,
    opponent: Box<dyn Opponent>,
}

impl GameEngine {
    /// Creates an engine in `mode` with a randomly seeded opponent.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_opponent(mode, Box::new(RandomOpponent::new()))
    }

    /// Creates an engine in `mode` whose AI replies come from `opponent`.
    #[instrument(skip(opponent), fields(opponent = opponent.name()))]
    pub fn with_opponent(mode: Mode, opponent: Box<dyn Opponent>) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            result: GameResult::InProgress,
            opponent,
        }
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) {
        info!(mode = mode.label(), "Mode selected");
        self.mode = mode;
        self.reset();
    }

    /// Clears the board and gives X the first move. The mode is kept.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board = Board::new();
        self.current_player = Player::X;
        self.result = GameResult::InProgress;
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// In [`Mode::PvAI`], when the move hands the turn to O, the opponent
    /// replies before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching the game if the coordinates are
    /// off the board, the cell is taken, or the game is already over.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Lets the computer opponent play for the current player.
    ///
    /// Only reached after the draw check, so the board always has an empty
    /// cell here.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] on a finished game and
    /// [`MoveError::NoLegalMove`] if the opponent declines to move.
    #[instrument(skip(self), fields(opponent = self.opponent.name()))]
    pub fn ai_move(&mut self) -> Result<MoveOutcome, MoveError> {
        if self.result.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = self.opponent.choose(&self.board).ok_or_else(|| {
            warn!("Opponent found no empty cell");
            MoveError::NoLegalMove
        })?;
        let mut outcome = self.play(pos)?;
        outcome.ai_reply = Some(pos);
        Ok(outcome)
    }

    /// Places a mark and advances the state machine.
    fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.result.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Cell::from(player));
        debug!(player = %player, position = %pos, "Mark placed");

        // Winner before draw: a full board with a line is a win.
        if self.check_winner(player) {
            return Ok(self.finish(GameResult::Win(player)));
        }
        if self.is_draw() {
            return Ok(self.finish(GameResult::Draw));
        }

        self.current_player = player.opponent();

        if self.mode == Mode::PvAI && self.current_player == Player::O {
            let reply = self.ai_move()?;
            return Ok(reply);
        }

        Ok(MoveOutcome::default())
    }

    fn finish(&mut self, result: GameResult) -> MoveOutcome {
        self.result = result;
        info!(result = %result, "Game finished");
        MoveOutcome {
            ai_reply: None,
            record: Some(GameRecord::new(&self.board, result)),
        }
    }

    /// True iff `player` has completed a row, column, or diagonal.
    pub fn check_winner(&self, player: Player) -> bool {
        rules::has_line(&self.board, player)
    }

    /// True iff the board is full and nobody has a line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the game result so far.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Returns the empty positions, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

use tracing::{debug, info};

use super::win::{self, Run};
use super::{Board, Player};
use crate::config::BoardConfig;
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Result of a single `play_move` call, for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Piece placed and the game goes on with `next` to move.
    Placed {
        row: usize,
        column: usize,
        player: Player,
        next: Player,
    },
    /// The move that ended the game.
    Win {
        player: Player,
        row: usize,
        column: usize,
        run: Run,
    },
    /// Last empty cell filled without a winner.
    Tie { row: usize, column: usize },
    /// Nothing changed.
    Rejected { reason: MoveError },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    /// True for the move that ended the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win { .. } | Outcome::Tie { .. })
    }
}

/// Serializable view of a session: the board as a flat row-major array of
/// 0/1/2 plus turn and status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub board: Board,
    pub active_player: Player,
    pub status: GameStatus,
    pub moves_played: usize,
}

/// One game. Owns its board; the only mutation path is [`GameSession::play_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    active: Player,
    status: GameStatus,
    moves_played: usize,
}

impl GameSession {
    /// Start a game on the standard 6x7 board, player one to move
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            active: Player::One,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Start a game on a custom board, which must be empty
    pub fn with_board(board: Board) -> Result<Self, BoardError> {
        if !board.is_empty() {
            return Err(BoardError::NotEmpty);
        }
        Ok(GameSession {
            board,
            ..Self::new()
        })
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        Self::with_board(Board::with_dimensions(config.rows, config.cols)?)
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Rejected moves (game over, column off the board, column full) leave
    /// the session untouched and keep the same player to move.
    pub fn play_move(&mut self, column: isize) -> Outcome {
        match self.try_move(column) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(column, %reason, player = %self.active, "move rejected");
                Outcome::Rejected { reason }
            }
        }
    }

    fn try_move(&mut self, column: isize) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let cols = self.board.cols();
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < cols)
            .ok_or(MoveError::InvalidColumn { column, cols })?;
        let row = self
            .board
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;

        let player = self.active;
        self.board.place(row, col, player);
        self.moves_played += 1;
        debug!(row, column = col, %player, "piece placed");

        // Win must be checked before the full-board check: the last cell can
        // complete a run.
        if let Some(run) = win::run_through(&self.board, row, col) {
            self.status = GameStatus::Won(player);
            info!(%player, moves = self.moves_played, ?run, "game won");
            return Ok(Outcome::Win {
                player,
                row,
                column: col,
                run,
            });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves_played, "game tied");
            return Ok(Outcome::Tie { row, column: col });
        }

        self.active = player.other();
        Ok(Outcome::Placed {
            row,
            column: col,
            player,
            next: self.active,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board, detached from the session
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Player whose move is awaited. After a win this stays on the winner.
    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full), empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            active_player: self.active,
            status: self.status,
            moves_played: self.moves_played,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

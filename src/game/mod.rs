//! Core Connect Four game logic: board, players, win detection, and the
//! session state machine that turns a column choice into an [`Outcome`].

mod board;
mod player;
mod session;
mod shared;
pub mod win;

pub use board::{Board, Cell, COLS, MAX_DIMENSION, MIN_DIMENSION, ROWS};
pub use player::Player;
pub use session::{GameSession, GameStatus, Outcome, Snapshot};
pub use shared::SharedSession;
pub use win::{Direction, Run, RUN_LENGTH};

//! Four-in-a-row detection.
//!
//! [`find_run`] scans every start cell in every direction. [`run_through`]
//! only walks the four axes through one cell, which is all a move can change.

use super::board::{Board, Cell};
use super::player::Player;

/// Number of aligned pieces that wins the game.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Toward larger row and larger column (`\`)
    DiagonalDownRight,
    /// Toward larger row and smaller column (`/`)
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four consecutive cells starting at `start` and stepping along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Run {
    pub start: (usize, usize),
    pub direction: Direction,
}

impl Run {
    pub fn cells(&self) -> [(usize, usize); RUN_LENGTH] {
        let (dr, dc) = self.direction.delta();
        let (row, col) = (self.start.0 as isize, self.start.1 as isize);
        std::array::from_fn(|i| {
            let i = i as isize;
            ((row + dr * i) as usize, (col + dc * i) as usize)
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().contains(&(row, col))
    }
}

fn is_winning_run(
    board: &Board,
    target: Cell,
    row: isize,
    col: isize,
    direction: Direction,
) -> bool {
    let (dr, dc) = direction.delta();
    (0..RUN_LENGTH as isize).all(|i| board.cell_at(row + dr * i, col + dc * i) == Some(target))
}

/// First winning run for `player` in row-major start order, directions in
/// [`Direction::ALL`] order.
pub fn find_run(board: &Board, player: Player) -> Option<Run> {
    let target = player.to_cell();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for direction in Direction::ALL {
                if is_winning_run(board, target, row as isize, col as isize, direction) {
                    return Some(Run {
                        start: (row, col),
                        direction,
                    });
                }
            }
        }
    }
    None
}

pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    find_run(board, player).is_some()
}

/// Count matching cells stepping away from (row, col), not counting the
/// origin itself.
fn count_ray(board: &Board, target: Cell, row: usize, col: usize, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
    while board.cell_at(r, c) == Some(target) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Winning run containing the piece at (row, col), if any.
///
/// The returned run starts at the top end of the line (leftmost for
/// horizontal lines). An empty cell never wins.
pub fn run_through(board: &Board, row: usize, col: usize) -> Option<Run> {
    let target = board.get(row, col);
    target.player()?;

    for direction in Direction::ALL {
        let (dr, dc) = direction.delta();
        let back = count_ray(board, target, row, col, -dr, -dc);
        let forward = count_ray(board, target, row, col, dr, dc);
        if back + 1 + forward >= RUN_LENGTH {
            let back = back as isize;
            let start = (
                (row as isize - dr * back) as usize,
                (col as isize - dc * back) as usize,
            );
            return Some(Run { start, direction });
        }
    }
    None
}

/// Check if the piece at (row, col) is part of four in a row
pub fn wins_through(board: &Board, row: usize, col: usize) -> bool {
    run_through(board, row, col).is_some()
}

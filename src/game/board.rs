use std::fmt;

use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Smallest dimension that can still hold a run of four.
pub const MIN_DIMENSION: usize = 4;

/// Largest accepted dimension.
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(into = "u8")]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.player().map_or(0, Player::number)
    }
}

/// Row-major grid. Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Self::empty(ROWS, COLS)
    }

    /// Create an empty board of the given size. Both dimensions must lie in
    /// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(BoardError::TooSmall { rows, cols });
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(BoardError::TooLarge { rows, cols });
        }
        Ok(Self::empty(rows, cols))
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is off the board; use [`Board::cell_at`] for
    /// coordinates that may be out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked lookup that accepts negative coordinates.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        Some(self.get(row, col))
    }

    /// Row a piece dropped into `col` would land on, or `None` if the column
    /// is full. `col` must be on the board.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Occupy an empty landing cell. Only reachable through `drop_piece` and
    /// the session, which keeps pieces stacked from the floor up.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(self.get(row, col).is_empty(), "cell ({row}, {col}) already taken");
        debug_assert!(
            row + 1 == self.rows || !self.get(row + 1, col).is_empty(),
            "cell ({row}, {col}) would float"
        );
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col as isize,
                cols: self.cols,
            });
        }
        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.place(row, col, player);
        Ok(row)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        match self.landing_row(col) {
            Some(row) => self.rows - 1 - row,
            None => self.rows,
        }
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Build a board from text rows (`.`, `X`, `O`), top row first. Skips the
    /// gravity checks so tests can describe arbitrary positions.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let cols = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|line| {
                assert_eq!(line.len(), cols, "ragged row {line:?}");
                line.chars().map(|ch| match ch {
                    '.' => Cell::Empty,
                    'X' => Cell::One,
                    'O' => Cell::Two,
                    other => panic!("unexpected cell {other:?}"),
                })
            })
            .collect();
        Board {
            rows: rows.len(),
            cols,
            cells,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

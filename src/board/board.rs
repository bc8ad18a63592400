//! Grid storage with gravity drops

use std::fmt;

use super::{Cell, Pos, COLS, ROWS, TOTAL_CELLS};
use crate::error::BoardError;

/// Column exploration order, centre first.
///
/// Central columns take part in more lines of four, so trying them first
/// tightens alpha-beta bounds sooner.
pub const COLUMN_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Canonical value of the board contents.
///
/// Each cell takes two bits of a `u128` (42 cells = 84 bits), so two boards
/// produce the same snapshot exactly when their cells match, whatever order
/// the markers were dropped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snapshot(u128);

impl Snapshot {
    /// Raw packed value
    #[inline]
    pub fn bits(self) -> u128 {
        self.0
    }
}

/// Connect Four board, row 0 on top.
///
/// A plain 42-cell array: copying a board is cheap, so every simulated
/// branch of the search works on its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from its wire form (0 = empty, 1 = human, 2 = computer).
    ///
    /// Rejects unknown markers and markers floating above an empty cell.
    pub fn from_grid(grid: &[[u8; COLS]; ROWS]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] =
                    Cell::from_marker(value).ok_or(BoardError::InvalidMarker { row, col, value })?;
            }
        }

        for col in 0..COLS {
            // Once a marker is seen going down, nothing below it may be empty
            let mut filled = false;
            for row in 0..ROWS {
                match board.cells[row][col] {
                    Cell::Empty if filled => {
                        return Err(BoardError::FloatingMarker { row: row - 1, col })
                    }
                    Cell::Empty => {}
                    _ => filled = true,
                }
            }
        }

        Ok(board)
    }

    /// Wire form of the board
    pub fn to_grid(&self) -> [[u8; COLS]; ROWS] {
        let mut grid = [[0u8; COLS]; ROWS];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                grid[row][col] = cell.marker();
            }
        }
        grid
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// A column accepts a marker while its top cell is empty
    #[inline]
    pub fn is_column_open(&self, column: usize) -> bool {
        column < COLS && self.cells[0][column] == Cell::Empty
    }

    /// Drop a marker into `column`; it lands on the lowest empty row.
    pub fn drop(&mut self, column: usize, cell: Cell) -> Result<Pos, BoardError> {
        if column >= COLS {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        if cell == Cell::Empty {
            return Err(BoardError::EmptyMarker);
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = cell;
                return Ok(Pos::new(row as u8, column as u8));
            }
        }
        Err(BoardError::ColumnFull { column })
    }

    /// Open columns in centre-out order
    pub fn valid_columns(&self) -> Vec<usize> {
        COLUMN_ORDER
            .iter()
            .copied()
            .filter(|&col| self.cells[0][col] == Cell::Empty)
            .collect()
    }

    /// No empty cell left anywhere
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Canonical key of the current contents
    pub fn snapshot(&self) -> Snapshot {
        let mut bits = 0u128;
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let idx = Pos::new(row as u8, col as u8).to_index();
                bits |= u128::from(cell.marker()) << (2 * idx);
            }
        }
        Snapshot(bits)
    }

    /// Number of markers on the board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        TOTAL_CELLS - self.stone_count()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One bracketed row per line, e.g. `[0, 0, 1, 2, 0, 0, 0]`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            write!(f, "[")?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", cell.marker())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

//! Board representation for Connect Four

pub mod board;


// Re-exports
pub use board::{Board, Snapshot, COLUMN_ORDER};

/// Number of rows (row 0 is the top)
pub const ROWS: usize = 6;
/// Number of columns
pub const COLS: usize = 7;
pub const TOTAL_CELLS: usize = ROWS * COLS; // 42

/// Wire marker for the human player
pub const HUMAN_MARKER: u8 = 1;
/// Wire marker for the computer player
pub const COMPUTER_MARKER: u8 = 2;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Player A, the human
    Human,
    /// Player B, the computer
    Computer,
}

impl Cell {
    /// Get opponent marker
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Human => Cell::Computer,
            Cell::Computer => Cell::Human,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Wire value of the cell (0 = empty, 1 = human, 2 = computer)
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Human => HUMAN_MARKER,
            Cell::Computer => COMPUTER_MARKER,
        }
    }

    /// Parse a wire value
    #[inline]
    pub fn from_marker(marker: u8) -> Option<Cell> {
        match marker {
            0 => Some(Cell::Empty),
            HUMAN_MARKER => Some(Cell::Human),
            COMPUTER_MARKER => Some(Cell::Computer),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROWS && (col as usize) < COLS);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
    }
}

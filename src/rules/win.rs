//! Four-in-a-row detection around the last placed marker
//!
//! A line of four through a cell lies entirely within three cells of it
//! along some axis, so only the 7x7 neighbourhood of the move (clipped to
//! the board) is scanned for line origins instead of the whole grid.

use crate::board::{Board, Cell, Pos, COLS, ROWS};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Markers needed in a row to win
pub const LINE_LENGTH: i32 = 4;

/// Reach of the neighbourhood scan around the move
const REACH: i32 = LINE_LENGTH - 1;

/// Check whether the marker at `last` completes a line of four.
///
/// `None` means no move has been made yet and never wins.
#[inline]
pub fn wins_at(board: &Board, last: Option<Pos>) -> bool {
    match last {
        Some(pos) => wins_at_coords(board, i32::from(pos.row), i32::from(pos.col)),
        None => false,
    }
}

/// Coordinate form of [`wins_at`], accepting the `(-1, -1)` "no move yet"
/// sentinel used by the wire protocol.
pub fn wins_at_coords(board: &Board, row: i32, col: i32) -> bool {
    if row == -1 && col == -1 {
        return false;
    }
    if !Pos::is_valid(row, col) {
        return false;
    }

    let player = board.get(Pos::new(row as u8, col as u8));
    if player == Cell::Empty {
        return false;
    }

    let row_start = (row - REACH).max(0);
    let row_end = (row + REACH).min(ROWS as i32 - 1);
    let col_start = (col - REACH).max(0);
    let col_end = (col + REACH).min(COLS as i32 - 1);

    for r in row_start..=row_end {
        for c in col_start..=col_end {
            if board.get(Pos::new(r as u8, c as u8)) != player {
                continue;
            }
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| has_four_from(board, r, c, dr, dc, player))
            {
                return true;
            }
        }
    }
    false
}

/// Walk four cells from an origin; all must be on the board and owned by `player`.
#[inline]
fn has_four_from(board: &Board, row: i32, col: i32, dr: i32, dc: i32, player: Cell) -> bool {
    (0..LINE_LENGTH).all(|i| {
        let r = row + i * dr;
        let c = col + i * dc;
        Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == player
    })
}

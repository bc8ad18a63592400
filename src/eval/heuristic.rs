//! Terminal evaluation for the minimax search
//!
//! There is no positional heuristic: a board is worth a win, a loss, or
//! nothing. Playing strength comes from search depth and move ordering.

use crate::board::{Board, Cell, Pos};
use crate::rules::wins_at;

/// Score of a completed line for the computer. Wins found at any depth
/// collapse to this value, so a quick win and a slow one compare equal.
pub const WIN_SCORE: i32 = 1000;

/// Score of a position with no completed line
pub const NEUTRAL_SCORE: i32 = 0;

/// Evaluate the board from the computer's point of view.
///
/// Returns [`WIN_SCORE`] if the marker at `last` completed a line for the
/// computer, `-WIN_SCORE` if it completed one for the human, otherwise
/// [`NEUTRAL_SCORE`].
#[must_use]
pub fn evaluate(board: &Board, last: Option<Pos>) -> i32 {
    let Some(pos) = last else {
        return NEUTRAL_SCORE;
    };
    if !wins_at(board, last) {
        return NEUTRAL_SCORE;
    }

    match board.get(pos) {
        Cell::Computer => WIN_SCORE,
        _ => -WIN_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_computer_win() {
        let board = Board::from_grid(&[
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 1, 1],
            [0, 0, 0, 0, 1, 1, 2],
            [0, 0, 2, 2, 2, 2, 1],
            [0, 0, 1, 2, 1, 2, 1],
        ])
        .unwrap();
        assert_eq!(evaluate(&board, Some(Pos::new(4, 2))), WIN_SCORE);
    }

    #[test]
    fn test_evaluate_human_win() {
        let board = Board::from_grid(&[
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 1, 1],
            [0, 0, 0, 0, 1, 1, 2],
            [0, 0, 2, 1, 2, 2, 1],
            [0, 0, 1, 2, 1, 2, 1],
        ])
        .unwrap();
        assert_eq!(evaluate(&board, Some(Pos::new(4, 3))), -WIN_SCORE);
    }

    #[test]
    fn test_evaluate_no_win() {
        let board = Board::from_grid(&[
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 1, 1],
            [0, 0, 0, 0, 1, 1, 2],
            [0, 0, 2, 0, 2, 2, 1],
            [0, 0, 1, 2, 1, 2, 1],
        ])
        .unwrap();
        assert_eq!(evaluate(&board, Some(Pos::new(4, 2))), NEUTRAL_SCORE);
    }

    #[test]
    fn test_evaluate_without_last_move() {
        let board = Board::new();
        assert_eq!(evaluate(&board, None), NEUTRAL_SCORE);
    }
}

//! Main AI engine: the computer player
//!
//! Wraps the iterative-deepening [`Searcher`] behind the contract the game
//! loop relies on: hand over a board, get back a column. The engine only
//! reads the caller's board; every simulated move happens on a copy.
//!
//! # Example
//!
//! ```
//! use connect4::{AIEngine, Board, Cell, EngineConfig};
//!
//! // Depth-capped config for a fast doc test
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     time_limit_ms: 1000,
//!     max_depth: Some(4),
//! });
//! let mut board = Board::new();
//! board.drop(3, Cell::Human).unwrap();
//!
//! let result = engine.select_move_with_stats(&board).unwrap();
//! println!("Column: {}", result.column);
//! println!("Depth: {}", result.depth);
//! println!("Time: {}ms", result.time_ms);
//! ```

use tracing::{error, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::search::{CacheStats, Searcher};

/// Result of a move selection with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Column to play, 0-6
    pub column: usize,
    /// Score of the column from the computer's point of view
    pub score: i32,
    /// Deepest completed search depth
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Positions held in the best-move cache after the search
    pub cache_entries: usize,
}

/// Connect Four AI engine.
///
/// Owns its best-move cache, which lives as long as the engine and is shared
/// by every move it selects. `select_move` takes `&mut self`, so one engine
/// serves one caller at a time.
///
/// # Example
///
/// ```
/// use connect4::{AIEngine, Board};
///
/// let mut engine = AIEngine::new();
/// engine.set_max_depth(Some(3));
/// let column = engine.select_move(&Board::new()).unwrap();
/// assert_eq!(column, 3);
/// ```
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default five-second budget and no depth cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    /// Choose the computer's column.
    ///
    /// Fails with [`EngineError::NoLegalMove`] on a full board; the caller
    /// is expected to check [`Board::is_full`] first.
    pub fn select_move(&mut self, board: &Board) -> Result<usize, EngineError> {
        self.select_move_with_stats(board).map(|result| result.column)
    }

    /// Choose the computer's column and report how the search went.
    pub fn select_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, EngineError> {
        if board.is_full() {
            error!("move requested on a full board");
            return Err(EngineError::NoLegalMove);
        }

        let result = self.searcher.search(board, self.config.limits());
        let column = result.best_move.ok_or(EngineError::NoLegalMove)?;
        let time_ms = u64::try_from(result.elapsed.as_millis()).unwrap_or(u64::MAX);
        let cache_entries = self.searcher.cache().len();

        info!(
            column,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            time_ms,
            cache_entries,
            "move selected"
        );

        Ok(MoveResult {
            column,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            cache_entries,
        })
    }

    /// Set the thinking time per move.
    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.config.time_limit_ms = time_ms;
    }

    /// Cap the iterative deepening; `None` searches until the time runs out.
    pub fn set_max_depth(&mut self, depth: Option<u8>) {
        self.config.max_depth = depth;
    }

    /// Forget all cached best moves.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.searcher.cache().stats()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, COLS, ROWS};
    use crate::eval::WIN_SCORE;

    fn fixed_depth(depth: u8) -> AIEngine {
        AIEngine::with_config(EngineConfig {
            time_limit_ms: 60_000,
            max_depth: Some(depth),
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().time_limit_ms, 5000);
        assert_eq!(engine.config().max_depth, None);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board = Board::from_grid(&[
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 1, 1],
            [0, 0, 0, 0, 1, 1, 2],
            [0, 0, 0, 2, 2, 2, 1],
            [0, 0, 1, 2, 1, 2, 1],
        ])
        .unwrap();

        let mut engine = fixed_depth(6);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.column, 2);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = Board::from_grid(&[
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 2, 0, 0, 0],
            [0, 0, 1, 2, 0, 0, 0],
            [0, 0, 1, 1, 0, 0, 0],
            [0, 0, 1, 2, 0, 0, 0],
        ])
        .unwrap();

        let mut engine = fixed_depth(6);
        assert_eq!(engine.select_move(&board), Ok(2));
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let cell = if (row + col / 2) % 2 == 0 { Cell::Human } else { Cell::Computer };
                board.drop(col, cell).unwrap();
            }
        }
        assert!(board.is_full());

        let mut engine = fixed_depth(4);
        assert_eq!(engine.select_move(&board), Err(EngineError::NoLegalMove));
    }

    #[test]
    fn test_engine_does_not_mutate_board() {
        let mut board = Board::new();
        board.drop(3, Cell::Human).unwrap();
        let before = board;

        let mut engine = fixed_depth(5);
        let column = engine.select_move(&board).unwrap();
        assert_eq!(board, before);
        assert!(board.is_column_open(column));
    }

    #[test]
    fn test_engine_cache_persists_between_moves() {
        let mut board = Board::new();
        board.drop(3, Cell::Human).unwrap();

        let mut engine = fixed_depth(4);
        let first = engine.select_move_with_stats(&board).unwrap();
        assert!(first.cache_entries > 0);

        board.drop(first.column, Cell::Computer).unwrap();
        board.drop(2, Cell::Human).unwrap();
        let second = engine.select_move_with_stats(&board).unwrap();
        assert!(second.cache_entries >= first.cache_entries);

        engine.clear_cache();
        assert_eq!(engine.cache_stats().entries, 0);
    }

    #[test]
    fn test_engine_setters() {
        let mut engine = AIEngine::default();
        engine.set_time_limit(250);
        engine.set_max_depth(Some(3));
        assert_eq!(engine.config().time_limit_ms, 250);
        assert_eq!(engine.config().max_depth, Some(3));

        let result = engine.select_move_with_stats(&Board::new()).unwrap();
        assert_eq!(result.depth, 3);
        assert_eq!(result.column, 3);
    }

    #[test]
    fn test_engine_time_reasonable() {
        let mut engine = AIEngine::with_config(EngineConfig {
            time_limit_ms: 200,
            max_depth: None,
        });
        let result = engine.select_move_with_stats(&Board::new()).unwrap();
        assert!(result.depth >= 1);
        assert!(result.time_ms < 2000, "took {}ms", result.time_ms);
    }
}

//! Alpha-Beta search with iterative deepening and a best-move cache
//!
//! This module implements the core search algorithm for the Connect Four AI.
//! It uses plain minimax (the computer maximizes, the human minimizes) with
//! alpha-beta pruning.
//!
//! # Features
//!
//! - Iterative deepening under a wall-clock budget
//! - Best-move cache consulted for move ordering
//! - Immediate-win cutoff before recursing into a move
//! - Centre-out column ordering
//!
//! # Example
//!
//! ```
//! use connect4::board::{Board, Cell};
//! use connect4::search::{SearchLimits, Searcher};
//!
//! let mut searcher = Searcher::new();
//! let mut board = Board::new();
//! board.drop(3, Cell::Human).unwrap();
//!
//! let result = searcher.search(&board, SearchLimits::fixed_depth(4));
//! if let Some(column) = result.best_move {
//!     println!("Best column: {}", column);
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::board::{Board, Cell, Pos};
use crate::eval::{evaluate, WIN_SCORE};
use crate::rules::wins_at;

use super::MoveCache;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Default thinking time per move
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Bounds on a single move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Wall-clock budget, measured from the start of the search
    pub time_limit: Duration,
    /// Deepest iteration to run; `None` keeps deepening until the budget runs out
    pub max_depth: Option<u8>,
    /// Node limit per iteration from depth 2 on; an iteration that reaches it
    /// is discarded the same way as one cut short by the clock
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    /// Depth-capped search with no effective deadline. Deterministic.
    #[must_use]
    pub fn fixed_depth(depth: u8) -> Self {
        Self {
            time_limit: Duration::MAX,
            max_depth: Some(depth),
            max_nodes: None,
        }
    }

    /// Time-bounded search with no depth cap
    #[must_use]
    pub fn timed(time_limit: Duration) -> Self {
        Self {
            time_limit,
            max_depth: None,
            max_nodes: None,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::timed(DEFAULT_TIME_LIMIT)
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first column tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Nodes whose exploration order came from the cache
    pub cache_move_hits: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }

    fn merge(&mut self, other: &SearchStats) {
        self.cutoffs += other.cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
        self.cache_move_hits += other.cache_move_hits;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best column found at the deepest completed depth
    pub best_move: Option<usize>,
    /// Score of the best column from the computer's point of view
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    /// Total nodes visited, including discarded iterations
    pub nodes: u64,
    /// Wall-clock time spent
    pub elapsed: Duration,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
            stats: SearchStats::default(),
        }
    }
}

// =============================================================================
// SearchContext: state threaded through one iteration of the recursion
// =============================================================================

/// Mutable state for one fixed-depth pass.
struct SearchContext<'a> {
    cache: &'a mut MoveCache,
    /// `None` never expires
    deadline: Option<Instant>,
    max_nodes: Option<u64>,
    nodes: u64,
    /// Set once a node skipped a child because a limit had been reached
    interrupted: bool,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    fn new(cache: &'a mut MoveCache, deadline: Option<Instant>, max_nodes: Option<u64>) -> Self {
        Self {
            cache,
            deadline,
            max_nodes,
            nodes: 0,
            interrupted: false,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn is_expired(&self) -> bool {
        self.max_nodes.is_some_and(|max| self.nodes >= max)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `last` is the cell filled by the move that produced `board`; it drives
    /// both the terminal win check and the leaf evaluation. Returns the score
    /// and the column that achieves it (`None` at terminal nodes).
    fn minimax(
        &mut self,
        board: &Board,
        last: Option<Pos>,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;
        let expired = self.is_expired();

        let mut columns = board.valid_columns();
        if depth == 0 || wins_at(board, last) || columns.is_empty() {
            return (evaluate(board, last), None);
        }

        // Try the previously best column first
        if let Some(hint) = self.cache.best_move(board.snapshot()) {
            if let Some(idx) = columns.iter().position(|&col| col == hint) {
                columns[..=idx].rotate_right(1);
                self.stats.cache_move_hits += 1;
            }
        }

        let (player, win_score) = if maximizing {
            (Cell::Computer, WIN_SCORE)
        } else {
            (Cell::Human, -WIN_SCORE)
        };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_column = None;

        for (i, &column) in columns.iter().enumerate() {
            let mut child = *board;
            let Ok(pos) = child.drop(column, player) else {
                continue;
            };

            if wins_at(&child, Some(pos)) {
                return (win_score, Some(column));
            }
            if expired {
                self.interrupted = true;
                continue;
            }

            let (score, reply) =
                self.minimax(&child, Some(pos), depth - 1, alpha, beta, !maximizing);
            // Terminal children have no reply; keep any older hint for them
            if let Some(reply) = reply {
                self.cache.store(child.snapshot(), reply);
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best_score, best_column)
    }
}

// =============================================================================
// Searcher: public entry point owning the cache
// =============================================================================

/// Iterative-deepening searcher.
///
/// Owns the best-move cache, which persists across searches so that later
/// moves of the same game benefit from earlier ones.
#[derive(Debug, Default)]
pub struct Searcher {
    cache: MoveCache,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for the computer's best column.
    ///
    /// Runs depth 1, 2, 3, ... until the deadline passes, `max_depth` is
    /// reached, or the depth exceeds the number of empty cells (deeper
    /// passes would replay the same tree). Depth 1 always runs to
    /// completion. A pass cut short by the deadline or `max_nodes` is discarded, so the
    /// result always comes from the deepest fully searched depth.
    ///
    /// `best_move` is `None` only when the board has no open column.
    #[must_use]
    pub fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        let start = Instant::now();
        let deadline = start.checked_add(limits.time_limit);

        let horizon = u8::try_from(board.empty_count()).unwrap_or(u8::MAX);
        let max_depth = limits
            .max_depth
            .map_or(horizon, |depth| depth.max(1).min(horizon));

        let root = board.snapshot();
        let mut best_result = SearchResult::empty();
        let mut nodes = 0u64;
        let mut stats = SearchStats::default();

        for depth in 1..=max_depth {
            if best_result.best_move.is_some()
                && deadline.is_some_and(|deadline| Instant::now() >= deadline)
            {
                break;
            }

            // Depth 1 always completes
            let mut ctx = if depth == 1 {
                SearchContext::new(&mut self.cache, None, None)
            } else {
                SearchContext::new(&mut self.cache, deadline, limits.max_nodes)
            };
            let (score, column) = ctx.minimax(board, None, depth, -INF, INF, true);
            nodes += ctx.nodes;
            stats.merge(&ctx.stats);

            if ctx.interrupted {
                if limits.max_depth.is_some() {
                    warn!(depth, max_depth, "search limit hit before the requested depth");
                } else {
                    debug!(depth, "deadline reached mid-iteration, keeping previous depth");
                }
                break;
            }

            if let Some(column) = column {
                self.cache.store(root, column);
                best_result.best_move = Some(column);
                best_result.score = score;
                best_result.depth = depth;
                debug!(depth, column, score, nodes, "depth completed");
            }
        }

        debug!(
            nodes,
            cutoffs = stats.cutoffs,
            first_move_rate = stats.first_move_rate(),
            cache_move_hits = stats.cache_move_hits,
            "search finished"
        );
        best_result.nodes = nodes;
        best_result.elapsed = start.elapsed();
        best_result.stats = stats;
        best_result
    }

    /// Read access to the best-move cache
    #[must_use]
    pub fn cache(&self) -> &MoveCache {
        &self.cache
    }

    /// Forget every cached best move.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

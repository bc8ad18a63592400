//! Search module for the Connect Four AI
//!
//! Contains:
//! - Best-move cache keyed by board snapshot
//! - Alpha-Beta minimax with iterative deepening under a time budget

pub mod alphabeta;
pub mod cache;

pub use alphabeta::{SearchLimits, SearchResult, SearchStats, Searcher, DEFAULT_TIME_LIMIT};
pub use cache::{CacheStats, MoveCache};

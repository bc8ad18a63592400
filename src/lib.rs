//! Connect Four AI engine
//!
//! A move-search engine for standard Connect Four:
//! - 6 rows x 7 columns, markers fall to the lowest empty cell
//! - Four in a row (horizontal, vertical or diagonal) wins
//! - A full board with no four is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and canonical snapshots
//! - [`rules`]: Win detection around the last placed marker
//! - [`eval`]: Terminal-or-neutral position scoring
//! - [`search`]: Iterative-deepening alpha-beta with a best-move cache
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Text-mode human-versus-computer loop
//!
//! # Quick Start
//!
//! ```
//! use connect4::{AIEngine, Board, Cell, EngineConfig};
//!
//! // Depth-capped config for a fast doc test
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     time_limit_ms: 500,
//!     max_depth: Some(5),
//! });
//!
//! board.drop(3, Cell::Human).unwrap();
//!
//! // AI responds as the computer player
//! let column = engine.select_move(&board).unwrap();
//! board.drop(column, Cell::Computer).unwrap();
//! println!("AI plays column {}", column + 1);
//! ```
//!
//! # Search
//!
//! Each move searches depth 1, 2, 3, ... until the thinking time (five
//! seconds by default) runs out, and answers with the best column of the
//! deepest depth that finished. Positions are scored only as win (+1000),
//! loss (-1000) or neutral (0).

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, COLS, ROWS};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, EngineError, GameError};
pub use game::GameSession;

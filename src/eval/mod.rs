//! Position evaluation

pub mod heuristic;

pub use heuristic::{evaluate, NEUTRAL_SCORE, WIN_SCORE};

//! Game rules for Connect Four
//!
//! Dropping is handled by [`crate::board::Board`]; this module holds the
//! win condition shared by the search and the game loop.

pub mod win;

// Re-exports for convenient access
pub use win::{wins_at, wins_at_coords, LINE_LENGTH};

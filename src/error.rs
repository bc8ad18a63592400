//! Error types for the board, engine, configuration and game loop

use std::path::PathBuf;

/// Errors raised by board mutation and construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (must be 0-6)")]
    ColumnOutOfRange { column: usize },

    #[error("cannot drop an empty marker")]
    EmptyMarker,

    #[error("invalid marker {value} at ({row}, {col})")]
    InvalidMarker { row: usize, col: usize, value: u8 },

    #[error("marker at ({row}, {col}) floats above an empty cell")]
    FloatingMarker { row: usize, col: usize },
}

/// Errors raised by move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The caller asked for a move on a full board
    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by the interactive game loop.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cannot switch turn from player {0}")]
    InvalidTurn(u8),

    #[error("engine chose unplayable column {column}")]
    IllegalEngineMove { column: usize },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

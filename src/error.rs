use std::path::PathBuf;

use crate::core::{MoveRecord, Vec2};

/// Errors that can occur while reading a level or saved board.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read level from {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized cell code {byte:#04x} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, byte: u8 },

    #[error("board has no player cell")]
    MissingPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Vec2),
}

/// Errors that can occur while reading or growing a move log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown move code {byte:#04x} at index {index}")]
    UnknownCode { index: usize, byte: u8 },

    #[error("move history is full ({capacity} moves)")]
    Full { capacity: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("invalid move log: {0}")]
    Parse(#[from] HistoryError),

    #[error("move {index} diverged: log has {expected:?}, board gave {actual:?}")]
    Diverged {
        index: usize,
        expected: MoveRecord,
        actual: Option<MoveRecord>,
    },
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

    #[error("config validation error: {0}")]
    Validation(String),
}

use std::path::PathBuf;

use crate::c4::Status;

/// Errors raised while playing a game of Connect Four.
///
/// None of these leave a game in a broken state; the caller can always fix
/// the input (pick another column, stop once the game is over) and carry on.
#[derive(Debug, thiserror::Error)]
pub enum C4Error {
    #[error("column {column} is not on the board")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over ({status})")]
    GameAlreadyOver { status: Status },

    #[error("no available columns")]
    NoAvailableColumns,

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading arena settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

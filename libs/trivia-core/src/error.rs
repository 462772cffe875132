//! Error types for trivia-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a day's trivia file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("file is empty")]
    EmptyInput,

    #[error("expected {expected} lines, got {actual}")]
    LineCount { expected: usize, actual: usize },

    #[error("invalid line format at index {line_index}: expected {expected} fields, got {actual}")]
    FieldCount {
        expected: usize,
        actual: usize,
        line_index: usize,
    },
}

/// Errors raised by a card source while fetching raw file content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error: status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors surfaced by a date load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("load of {date} was superseded by a newer request")]
    Superseded { date: String },
}

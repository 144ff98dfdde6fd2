//! Storage error types.
//!
//! Returned when loading records or parsing a message kind. Lookups never fail.

use thiserror::Error;

/// Errors that can occur when building a repository or parsing query input.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown message type: {0}")]
    UnknownKind(String),
}

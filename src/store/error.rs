//! Error types for store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or querying the note store.
///
/// A missing note is never an error: point lookups return `Ok(None)` and
/// mutations of nonexistent ids are documented no-ops.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory for the backing database could not be created.
    ///
    /// Recoverable: callers may retry with an alternate location such as
    /// the current working directory.
    #[error("cannot create data directory {path}: {source}")]
    Init {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A database error occurred during a read or write.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored record could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

//! Error type for the line reader.

use thiserror::Error;

/// Error returned by [`BetaReader`](crate::BetaReader) operations.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Error reading from the underlying source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The reader was used after [`close`](crate::BetaReader::close).
    #[error("reader is already closed")]
    Closed,
}

/// Result alias for reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;

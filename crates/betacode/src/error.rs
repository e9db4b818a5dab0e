//! Error type for the facade.

use betacode_reader::ReaderError;
use thiserror::Error;

/// Error returned by the streaming entry points.
///
/// Line conversion itself never fails; only reading and writing can.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or buffering the Beta Code source failed.
    #[error(transparent)]
    Reader(#[from] ReaderError),

    /// Writing the converted text failed.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

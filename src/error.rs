//! Error types for the locus library.

use thiserror::Error;

/// Errors that can occur during locus operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while writing annotation output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A coordinate shift would move a gene past the start of its sequence.
    #[error("{0}")]
    OutOfRange(String),

    /// An aggregate query required a sub-structure that is absent.
    #[error("{0}")]
    MissingData(String),
}

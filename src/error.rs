//! Error types for the canonqc library.

use thiserror::Error;

/// Errors that can occur during canonqc operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A parse error occurred while reading input data.
    #[error("{0}")]
    Parse(String),

    /// A validation constraint was violated.
    #[error("{0}")]
    Validation(String),

    /// A gene row referenced a chromosome absent from the sequence store.
    /// Fatal for that record; no default is substituted.
    #[error("chromosome not found in sequence store: {0}")]
    MissingChromosome(String),

    /// A coordinate slice fell outside the chromosome sequence.
    #[error("slice {start}..{end} out of range for {chr} (length {len})")]
    OutOfRange {
        chr: String,
        start: usize,
        end: usize,
        len: usize,
    },
}

//! Error types for the tangle core

use thiserror::Error;

/// Result type for tangle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tangle errors
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong encoding length at construction (bytes, trytes or trits)
    #[error("Invalid {kind} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Which encoding was being constructed
        kind: &'static str,
        /// Required element count
        expected: usize,
        /// Supplied element count
        actual: usize,
    },

    /// Field name outside the published field table
    #[error("Unknown transaction field: {0}")]
    UnknownField(String),

    /// Ternary conversion error
    #[error(transparent)]
    Ternary(#[from] ternary::Error),

    /// Storage error, propagated unchanged from the backend
    #[error("Storage error: {0}")]
    Storage(String),

    /// Crypto collaborator error
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Concurrency error (task join failure, etc.)
    #[error("Concurrency error: {0}")]
    Concurrency(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

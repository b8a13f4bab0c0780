//! Error types for the affect core library.
//!
//! The pipeline itself is total — classification always yields a defined
//! category and the catalog lookup is an exhaustive match — so errors only
//! arise at the configuration boundary.

use thiserror::Error;

/// Top-level error type for affect operations.
#[derive(Error, Debug)]
pub enum AffectError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, AffectError>;

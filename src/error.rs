//! Error types for the Tmesis library.
//!
//! All errors are represented by the [`TmesisError`] enum. Errors surface at
//! the edges, when a caller hands in something that is not text or invalid
//! options, or when a dictionary or options file cannot be loaded. Inside the
//! pipeline the only error is a metrical alignment that fails to cover the
//! bare tokenization.
//!
//! # Examples
//!
//! ```
//! use tmesis::error::{TmesisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TmesisError::invalid_argument("The argument passed must be a String"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tmesis operations.
#[derive(Error, Debug)]
pub enum TmesisError {
    /// I/O errors (reading dictionaries, option files, input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis errors (annotated and bare sequences that cannot be aligned)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Stem lexicon errors (malformed dictionary data)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// The caller passed a value the tokenizer cannot work on
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TmesisError.
pub type Result<T> = std::result::Result<T, TmesisError>;

impl TmesisError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TmesisError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TmesisError::Lexicon(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TmesisError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TmesisError::Config(msg.into())
    }
}

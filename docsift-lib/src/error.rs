//! Error types for docsift

use thiserror::Error;

/// Result type alias for docsift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying an engine
#[derive(Error, Debug)]
pub enum Error {
    /// The corpus or engine configuration cannot produce an index.
    ///
    /// Raised at construction only; no engine is returned.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A query was rejected before reaching the ranker.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` for errors caused by the caller's request rather than
    /// by how the engine was set up.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

//! Error types for the vocabulary.com client
//!
//! Single error enum with human-readable messages. Transport failures and
//! malformed responses pass through unchanged; there is no retry layer.

use thiserror::Error;

/// Error type for all vocabulary.com client operations
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse a scraped document
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Caller supplied an empty word or text
    #[error("Invalid input: {0}")]
    InvalidWord(String),
}

/// Result type alias for vocabulary.com operations
pub type Result<T> = std::result::Result<T, VocabularyError>;

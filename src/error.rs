//! Error types for the Javelin library.
//!
//! This module provides error handling for all Javelin operations. All errors
//! are represented by the [`JavelinError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use javelin::error::{JavelinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(JavelinError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Javelin operations.
///
/// This enum represents all possible errors that can occur in the Javelin
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum JavelinError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query vector dimensionality differs from the index dimensionality.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index build attempted on zero documents.
    #[error("Empty corpus: cannot build an index from zero documents")]
    EmptyCorpus,

    /// Fusion weight outside the closed interval [0, 1].
    #[error("Invalid alpha: {0} (must be within [0, 1])")]
    InvalidAlpha(f32),

    /// Configured result budget is unusable.
    #[error("Invalid top_k: {0}")]
    InvalidTopK(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Embedding provider errors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Answer generation provider errors
    #[error("Generation error: {0}")]
    Generation(String),

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JavelinError.
pub type Result<T> = std::result::Result<T, JavelinError>;

impl JavelinError {
    /// Create a new dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        JavelinError::DimensionMismatch { expected, actual }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JavelinError::Analysis(msg.into())
    }

    /// Create a new embedding provider error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        JavelinError::Embedding(msg.into())
    }

    /// Create a new generation provider error.
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        JavelinError::Generation(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        JavelinError::Config(msg.into())
    }

    /// Create a new invalid top_k error.
    pub fn invalid_top_k<S: Into<String>>(msg: S) -> Self {
        JavelinError::InvalidTopK(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JavelinError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        JavelinError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = JavelinError::dimension_mismatch(128, 64);
        assert_eq!(error.to_string(), "Dimension mismatch: expected 128, got 64");

        let error = JavelinError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = JavelinError::embedding("Test embedding error");
        assert_eq!(error.to_string(), "Embedding error: Test embedding error");

        let error = JavelinError::InvalidAlpha(1.5);
        assert_eq!(error.to_string(), "Invalid alpha: 1.5 (must be within [0, 1])");
    }

    #[test]
    fn test_empty_corpus_display() {
        let error = JavelinError::EmptyCorpus;
        assert_eq!(
            error.to_string(),
            "Empty corpus: cannot build an index from zero documents"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let javelin_error = JavelinError::from(io_error);

        match javelin_error {
            JavelinError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

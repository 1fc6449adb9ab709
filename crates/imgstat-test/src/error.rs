//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Bucket array comparison failed
    #[error("bucket comparison failed at index {index}, level {level}")]
    BucketMismatch { index: usize, level: usize },

    /// Byte string comparison failed
    #[error("string comparison failed at index {index}: sizes {len1} vs {len2}")]
    StringMismatch {
        index: usize,
        len1: usize,
        len2: usize,
    },

    /// File comparison failed
    #[error("file comparison failed at index {index}: {path}")]
    FileMismatch { index: usize, path: String },

    /// Golden file not found
    #[error("golden file not found: {path}")]
    GoldenNotFound { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

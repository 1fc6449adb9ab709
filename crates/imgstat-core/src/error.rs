//! Error types for imgstat-core
//!
//! Provides a unified error type for all fallible operations in the core
//! crate. Histogram validation errors form the "invalid argument" class and
//! are raised before any pixel is scanned, so a failed call never yields a
//! partial result. Registry lookups have their own variants.
//!
//! [`RunningStatistic`](crate::RunningStatistic) never fails and has no
//! error path.

use thiserror::Error;

/// imgstat error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Zero-sized image paired with pixel data, or a size that overflows
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match `width * height * bytes_per_pixel`
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Unrecognized pixel format tag
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A statistic with this id is already registered
    #[error("statistic already exists: {0}")]
    StatisticExists(String),

    /// No statistic is registered under this id
    #[error("statistic not found: {0}")]
    StatisticNotFound(String),
}

impl Error {
    /// Whether this error was caused by a bad argument to the histogram engine.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimension { .. }
                | Error::BufferSizeMismatch { .. }
                | Error::UnsupportedFormat(_)
                | Error::InvalidParameter(_)
        )
    }
}

/// Result type alias for imgstat operations
pub type Result<T> = std::result::Result<T, Error>;

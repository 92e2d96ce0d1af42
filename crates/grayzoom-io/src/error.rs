//! I/O error types
//!
//! Provides a unified error type for all image I/O operations, so that
//! callers only need to handle one error type regardless of format
//! details.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with a supported magic number
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header is present but malformed
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The declared maximum sample value is outside the supported range
    #[error("unsupported max sample value {0}: must be in 1..=255")]
    UnsupportedMaxVal(u32),

    /// The pixel data ended before the declared dimensions were satisfied
    #[error("truncated pixel data: expected {expected} samples, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// An error from the core library (dimension or buffer mismatch)
    #[error("core error: {0}")]
    Core(#[from] grayzoom_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

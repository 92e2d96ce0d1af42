//! Error types for grayzoom-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// grayzoom-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Buffer length does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Canvas dimensions would overflow when multiplied out
    #[error("canvas dimensions overflow: {width}x{height} at scale {scale}")]
    DimensionOverflow {
        width: usize,
        height: usize,
        scale: usize,
    },

    /// Invalid channel weights
    #[error("invalid channel weights: {0}")]
    InvalidWeights(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

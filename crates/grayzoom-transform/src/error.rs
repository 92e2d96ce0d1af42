//! Error types for grayzoom-transform

use thiserror::Error;

/// Errors that can occur while setting up or running the upscale pipeline
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grayzoom_core::Error),

    /// Scale factor outside the supported range
    #[error("invalid scale factor {0}: must be in 1..={max}", max = crate::MAX_SCALE)]
    InvalidScaleFactor(usize),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

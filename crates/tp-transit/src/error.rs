//! Transit-optimizer error type.

use thiserror::Error;

/// Errors produced by `tp-transit`.
#[derive(Debug, Error)]
pub enum TransitError {
    /// An input row carried an unusable numeric value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Shorthand result type for `tp-transit` operations.
pub type TransitResult<T> = Result<T, TransitError>;

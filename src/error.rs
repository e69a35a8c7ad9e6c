//! Error types for rope operations.

use thiserror::Error;

/// Error type for rope operations.
///
/// A failed operation never leaves anything half-built: ropes are immutable,
/// so the operand is untouched and no new rope is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An offset fell outside the rope. Split and slice accept `[0, length]`,
    /// point access accepts `[0, length)`.
    #[error("index {index} out of range for rope of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// Too few operands to concatenate, or a reversed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for rope operations.
pub type Result<T> = std::result::Result<T, Error>;

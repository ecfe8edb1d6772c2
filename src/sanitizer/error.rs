//! Error types for strict filename sanitization.
//!
//! Only [`sanitize`](super::sanitize) can fail. The safe and pretty variants
//! repair every input instead of rejecting it.

use thiserror::Error;

/// Error returned by strict sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizeError {
    /// No filename was supplied.
    #[error("filename is absent")]
    NullInput,
    /// The filename cannot be made safe without inventing content.
    #[error("invalid filename: {0}")]
    InvalidArgument(#[from] InvalidFilename),
}

/// Why a filename was rejected as an invalid argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFilename {
    /// Empty or whitespace only.
    #[error("input has zero non-whitespace characters")]
    Blank,
    /// Longer than the maximum allowed length.
    #[error("input is too long ({length} code units), {max} is the maximum allowed")]
    TooLong { length: usize, max: usize },
}

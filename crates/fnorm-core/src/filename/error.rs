//! Error types for filename normalization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    /// `limit_length` was asked for a non-positive maximum.
    #[error("invalid length: {0} (must be greater than zero)")]
    InvalidLength(usize),
}

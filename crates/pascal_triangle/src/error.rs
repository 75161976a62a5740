//! Error types for the pascal_triangle crate.

use thiserror::Error;

/// Errors surfaced by [`crate::TriangleBuilder`] operations.
///
/// Every count and index parameter in the API is unsigned, so the
/// negative-input case has no representation; what remains is indexing past
/// the generated rows and focus calls made out of sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangleError {
    /// Row or column index outside the currently generated triangle.
    #[error("out of range: {reason}")]
    OutOfRange { reason: String },

    /// Focus operation called out of sequence.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

pub type Result<T> = std::result::Result<T, TriangleError>;

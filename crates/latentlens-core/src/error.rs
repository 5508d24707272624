//! Error types for the core crate.

use thiserror::Error;

/// Coarse classification of every error raised by latentlens.
///
/// Callers at the application boundary match on the kind to decide how to
/// present a failure; the concrete variants carry the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input violated an operation's precondition.
    InvalidArgument,
    /// A requested entity or representation does not exist.
    NotFound,
    /// A mathematical or internal consistency precondition cannot hold.
    InvalidState,
    /// A component index was outside `[0, dim)`.
    IndexOutOfRange,
    /// Reading or parsing external input failed.
    Io,
}

/// Errors that can occur in vector and representation operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A vector was constructed from zero components.
    #[error("vector must have at least one component")]
    EmptyVector,

    /// Dimension mismatch between two vectors.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The expected dimension.
        expected: usize,
        /// The actual dimension.
        actual: usize,
    },

    /// Component index out of bounds.
    #[error("index out of bounds: {index} >= {dim}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The vector dimension (exclusive upper bound).
        dim: usize,
    },

    /// An operation needed a direction but the vector has zero length.
    #[error("cannot {operation} a zero vector")]
    ZeroNorm {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An average was requested over no vectors.
    #[error("cannot average an empty collection of vectors")]
    EmptyAverage,

    /// Invalid representation name.
    #[error("invalid representation name: {0}")]
    InvalidName(String),
}

impl CoreError {
    /// Creates a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyVector
            | Self::DimensionMismatch { .. }
            | Self::EmptyAverage
            | Self::InvalidName(_) => ErrorKind::InvalidArgument,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfRange,
            Self::ZeroNorm { .. } => ErrorKind::InvalidState,
        }
    }
}

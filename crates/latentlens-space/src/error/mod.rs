//! Error types for the space crate.

use std::path::PathBuf;

use latentlens_core::{CoreError, ErrorKind, Representation};
use thiserror::Error;

/// Errors that can occur while building or querying an embedding space.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// A vector or representation operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Cosine distance is undefined when either vector has zero length.
    #[error("{metric} distance is undefined for zero vectors")]
    ZeroVectorDistance {
        /// The metric that was evaluated.
        metric: &'static str,
    },

    /// A count parameter (`k`, `top_n`, `keep_closest`) was zero.
    #[error("{name} must be >= 1")]
    InvalidCount {
        /// The parameter name.
        name: &'static str,
    },

    /// The id is not part of the group.
    #[error("unknown id: {0}")]
    UnknownId(String),

    /// The entity has no vector for the representation.
    #[error("missing representation '{representation}' for id {id}")]
    MissingRepresentation {
        /// The entity id.
        id: String,
        /// The representation that was requested.
        representation: Representation,
    },

    /// The representation is not available in the group.
    #[error("representation '{0}' is not available")]
    UnknownRepresentation(Representation),

    /// An entity was built without any representation.
    #[error("entity {id} must have at least one representation")]
    EmptyEmbedding {
        /// The entity id.
        id: String,
    },

    /// A storage was built from no entities.
    #[error("embedding storage cannot be empty")]
    EmptyStorage,

    /// The same id was supplied twice.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// An entity's representation set differs from the group-wide set.
    #[error("inconsistent representation set for id {id}: expected {expected}, got {actual}")]
    InconsistentRepresentations {
        /// The offending entity id.
        id: String,
        /// The group-wide representation set.
        expected: String,
        /// The entity's representation set.
        actual: String,
    },

    /// The assembler was given no sources.
    #[error("at least one representation source is required")]
    NoSources,

    /// Two sources provide the same representation.
    #[error("duplicate representation source: {0}")]
    DuplicateRepresentation(Representation),

    /// A source loaded no vectors.
    #[error("empty source for representation: {0}")]
    EmptySource(Representation),

    /// Two sources do not cover the exact same ids.
    #[error(
        "all representations must contain the same id set: '{representation}' has {actual} ids, \
         '{base}' has {expected}"
    )]
    IdSetMismatch {
        /// The representation whose id set defines the expected set.
        base: Representation,
        /// The representation whose id set differs.
        representation: Representation,
        /// Number of ids in the base set.
        expected: usize,
        /// Number of ids in the differing set.
        actual: usize,
    },

    /// A vector disappeared between id-set validation and assembly.
    ///
    /// This indicates an internal inconsistency in a source.
    #[error("missing vector for id {id} in representation '{representation}'")]
    MissingVector {
        /// The entity id.
        id: String,
        /// The representation without a vector.
        representation: Representation,
    },

    /// A semantic axis needs two distinct anchors.
    #[error("cannot build axis: anchors are identical")]
    IdenticalAnchors,

    /// A term sign other than +1 or -1.
    #[error("sign must be +1 or -1, got {0}")]
    InvalidSign(i32),

    /// A vector expression without terms.
    #[error("vector expression must contain at least one term")]
    EmptyExpression,

    /// Centroid grouping over no ids.
    #[error("selection must contain at least one id")]
    EmptySelection,

    /// No metric is registered under the identifier.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    /// A source's field layout is unusable.
    #[error("invalid source format: {0}")]
    InvalidFormat(String),

    /// A source produced malformed content.
    #[error("invalid data for representation '{representation}': {message}")]
    InvalidSource {
        /// The representation being loaded.
        representation: Representation,
        /// What was wrong.
        message: String,
    },

    /// Reading a source failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON source could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpaceError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::UnknownId(_)
            | Self::MissingRepresentation { .. }
            | Self::UnknownRepresentation(_) => ErrorKind::NotFound,
            Self::MissingVector { .. } => ErrorKind::InvalidState,
            Self::Io { .. } | Self::Json(_) => ErrorKind::Io,
            Self::ZeroVectorDistance { .. }
            | Self::InvalidCount { .. }
            | Self::EmptyEmbedding { .. }
            | Self::EmptyStorage
            | Self::DuplicateId(_)
            | Self::InconsistentRepresentations { .. }
            | Self::NoSources
            | Self::DuplicateRepresentation(_)
            | Self::EmptySource(_)
            | Self::IdSetMismatch { .. }
            | Self::IdenticalAnchors
            | Self::InvalidSign(_)
            | Self::EmptyExpression
            | Self::EmptySelection
            | Self::UnknownMetric(_)
            | Self::InvalidFormat(_)
            | Self::InvalidSource { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn unknown_id(id: &impl std::fmt::Debug) -> Self {
        Self::UnknownId(format!("{id:?}"))
    }
}

/// Validates a count parameter that must be at least one.
pub(crate) fn require_positive(value: usize, name: &'static str) -> Result<(), SpaceError> {
    if value == 0 {
        return Err(SpaceError::InvalidCount { name });
    }
    Ok(())
}

//! Per-representation vector sources.
//!
//! A [`RepresentationSource`] supplies the vectors of one representation for
//! every entity. The [`EmbeddingAssembler`](crate::store::EmbeddingAssembler)
//! merges several sources into one storage.
//!
//! - [`InMemorySource`] - Vectors already held in memory
//! - [`JsonSource`] - Vectors read from a JSON array of `{id, vector}` objects,
//!   with string ids or ids parsed by an [`IdParser`]

mod json;

use std::collections::BTreeMap;

use latentlens_core::{Representation, Vector};

pub use json::{IdParser, JsonFormat, JsonSource};

use crate::error::SpaceError;
use crate::store::EntityKey;

/// A single representation's input.
///
/// Implementations must return the same map from every successful call to
/// [`load`](Self::load), and the returned map is the caller's own copy.
pub trait RepresentationSource<T: EntityKey>: Send + Sync {
    /// The representation this source provides.
    fn representation(&self) -> &Representation;

    /// Loads (or returns cached) vectors keyed by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or is malformed.
    fn load(&self) -> Result<BTreeMap<T, Vector>, SpaceError>;

    /// The dimension of the vectors, once known.
    ///
    /// Sources that read lazily return `None` until [`load`](Self::load) has
    /// succeeded.
    fn dimension(&self) -> Option<usize>;
}

/// A source over vectors that are already in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource<T> {
    representation: Representation,
    vectors: BTreeMap<T, Vector>,
}

impl<T: EntityKey> InMemorySource<T> {
    /// Creates a source for `representation`.
    #[must_use]
    pub fn new(representation: Representation, vectors: BTreeMap<T, Vector>) -> Self {
        Self { representation, vectors }
    }
}

impl<T: EntityKey> RepresentationSource<T> for InMemorySource<T> {
    fn representation(&self) -> &Representation {
        &self.representation
    }

    fn load(&self) -> Result<BTreeMap<T, Vector>, SpaceError> {
        Ok(self.vectors.clone())
    }

    fn dimension(&self) -> Option<usize> {
        self.vectors.values().next().map(Vector::dim)
    }
}

//! A single entity and its vectors.

use std::collections::BTreeMap;

use latentlens_core::{Representation, Vector};

use super::EntityKey;
use crate::error::SpaceError;

/// One entity's vectors across representations.
///
/// Every representation maps to exactly one vector, and there is at least one
/// representation. The value is immutable once built: accessors hand out
/// shared references only.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use latentlens_core::{Representation, Vector};
/// use latentlens_space::store::EmbeddingSingle;
///
/// let full = Representation::of("full")?;
/// let item = EmbeddingSingle::new(
///     "cat".to_string(),
///     BTreeMap::from([(full.clone(), Vector::new(vec![0.1, 0.2])?)]),
/// )?;
///
/// assert!(item.has(&full));
/// assert_eq!(item.require(&full)?.dim(), 2);
/// # Ok::<(), latentlens_space::SpaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingSingle<T> {
    id: T,
    vectors: BTreeMap<Representation, Vector>,
}

impl<T: EntityKey> EmbeddingSingle<T> {
    /// Creates an entity from its per-representation vectors.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptyEmbedding`] if `vectors` is empty.
    pub fn new(id: T, vectors: BTreeMap<Representation, Vector>) -> Result<Self, SpaceError> {
        if vectors.is_empty() {
            return Err(SpaceError::EmptyEmbedding { id: format!("{id:?}") });
        }
        Ok(Self { id, vectors })
    }

    /// The entity id.
    #[must_use]
    pub fn id(&self) -> &T {
        &self.id
    }

    /// The representations this entity has a vector for, in canonical order.
    pub fn representations(&self) -> impl ExactSizeIterator<Item = &Representation> {
        self.vectors.keys()
    }

    /// Read-only view of the representation map.
    #[must_use]
    pub fn vectors(&self) -> &BTreeMap<Representation, Vector> {
        &self.vectors
    }

    /// Whether a vector exists for `rep`.
    #[must_use]
    pub fn has(&self, rep: &Representation) -> bool {
        self.vectors.contains_key(rep)
    }

    /// The vector for `rep`, if present.
    #[must_use]
    pub fn get(&self, rep: &Representation) -> Option<&Vector> {
        self.vectors.get(rep)
    }

    /// The vector for `rep`.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::MissingRepresentation`] naming the id and the
    /// representation if it is absent.
    pub fn require(&self, rep: &Representation) -> Result<&Vector, SpaceError> {
        self.get(rep).ok_or_else(|| SpaceError::MissingRepresentation {
            id: format!("{:?}", self.id),
            representation: rep.clone(),
        })
    }
}

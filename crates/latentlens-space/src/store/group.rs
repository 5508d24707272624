//! The read-only query interface over a set of entities.

use std::collections::BTreeSet;

use latentlens_core::{Representation, Vector};

use super::{EmbeddingSingle, EntityKey};
use crate::error::SpaceError;

/// Read-only access to a collection of entities sharing one representation set.
///
/// Every search component depends on this trait rather than on
/// [`EmbeddingStorage`](super::EmbeddingStorage), so tests can substitute a
/// hand-written in-memory fake.
///
/// Implementations are immutable once built and must be safe to query from
/// many threads at once.
pub trait EmbeddingGroup<T: EntityKey>: Send + Sync {
    /// Looks up an entity.
    fn find(&self, id: &T) -> Option<&EmbeddingSingle<T>>;

    /// All ids in the group.
    ///
    /// The order is the order searches scan in; [`EmbeddingStorage`](super::EmbeddingStorage)
    /// yields ascending ids.
    fn ids(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// The representation set every entity in the group exposes.
    fn available_representations(&self) -> &BTreeSet<Representation>;

    /// Number of entities.
    fn len(&self) -> usize;

    /// Whether the group has no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` is part of the group.
    fn contains(&self, id: &T) -> bool {
        self.find(id).is_some()
    }

    /// The entity for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::UnknownId`] if `id` is not in the group.
    fn require_single(&self, id: &T) -> Result<&EmbeddingSingle<T>, SpaceError> {
        self.find(id).ok_or_else(|| SpaceError::unknown_id(id))
    }

    /// The vector of `id` in representation `rep`.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::UnknownId`] for an unknown id and
    /// [`SpaceError::MissingRepresentation`] if the entity lacks `rep`.
    fn require<'a>(&'a self, id: &T, rep: &Representation) -> Result<&'a Vector, SpaceError>
    where
        T: 'a,
    {
        self.require_single(id)?.require(rep)
    }

    /// The dimension shared by all vectors of `rep`.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::UnknownRepresentation`] if `rep` is not available,
    /// or the group is empty.
    fn dimension(&self, rep: &Representation) -> Result<usize, SpaceError> {
        if !self.available_representations().contains(rep) {
            return Err(SpaceError::UnknownRepresentation(rep.clone()));
        }
        let first =
            self.ids().next().ok_or_else(|| SpaceError::UnknownRepresentation(rep.clone()))?;
        Ok(self.require(first, rep)?.dim())
    }
}

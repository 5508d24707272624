//! The immutable in-memory embedding store.

use std::collections::{BTreeMap, BTreeSet};

use latentlens_core::Representation;

use super::{EmbeddingGroup, EmbeddingSingle, EntityKey};
use crate::error::SpaceError;

/// An immutable collection of entities in which every entity exposes the
/// same representation set.
///
/// The consistency rule is enforced at construction: a single entity with a
/// different representation set rejects the whole store. After construction
/// nothing can be added or removed, so a storage wrapped in an `Arc` can be
/// shared by any number of concurrent readers without locking.
///
/// Ids are kept in ascending order, which makes every scan (and therefore
/// every tie between equal scores) deterministic.
///
/// Usually built by [`EmbeddingAssembler`](super::EmbeddingAssembler).
#[derive(Debug, Clone)]
pub struct EmbeddingStorage<T> {
    by_id: BTreeMap<T, EmbeddingSingle<T>>,
    available: BTreeSet<Representation>,
}

impl<T: EntityKey> EmbeddingStorage<T> {
    /// Builds a storage from entities.
    ///
    /// The representation set of the first entity (in id order) becomes the
    /// canonical set.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptyStorage`] for no entities,
    /// [`SpaceError::DuplicateId`] if an id appears twice, and
    /// [`SpaceError::InconsistentRepresentations`] if any entity's
    /// representation set differs from the canonical one.
    pub fn new<I>(entries: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = EmbeddingSingle<T>>,
    {
        let mut by_id = BTreeMap::new();
        for entry in entries {
            let id = entry.id().clone();
            if let Some(previous) = by_id.insert(id, entry) {
                return Err(SpaceError::DuplicateId(format!("{:?}", previous.id())));
            }
        }

        let first = by_id.values().next().ok_or(SpaceError::EmptyStorage)?;
        let available: BTreeSet<Representation> = first.representations().cloned().collect();

        for item in by_id.values() {
            if !item.representations().eq(available.iter()) {
                return Err(SpaceError::InconsistentRepresentations {
                    id: format!("{:?}", item.id()),
                    expected: format_set(available.iter()),
                    actual: format_set(item.representations()),
                });
            }
        }

        Ok(Self { by_id, available })
    }

    /// Iterates entities in ascending id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EmbeddingSingle<T>> {
        self.by_id.values()
    }
}

impl<T: EntityKey> EmbeddingGroup<T> for EmbeddingStorage<T> {
    fn find(&self, id: &T) -> Option<&EmbeddingSingle<T>> {
        self.by_id.get(id)
    }

    fn ids(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.by_id.keys())
    }

    fn available_representations(&self) -> &BTreeSet<Representation> {
        &self.available
    }

    fn len(&self) -> usize {
        self.by_id.len()
    }
}

fn format_set<'a>(reps: impl Iterator<Item = &'a Representation>) -> String {
    let names: Vec<&str> = reps.map(Representation::name).collect();
    format!("[{}]", names.join(", "))
}

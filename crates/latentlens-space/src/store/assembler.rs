//! Merging per-representation sources into one storage.

use std::collections::{BTreeMap, BTreeSet};

use latentlens_core::{Representation, Vector};
use tracing::{debug, info};

use super::{EmbeddingSingle, EmbeddingStorage, EntityKey};
use crate::error::SpaceError;
use crate::source::RepresentationSource;

/// Builds an [`EmbeddingStorage`] from several [`RepresentationSource`]s.
///
/// Assembly is strict: every source must provide a distinct representation
/// and the exact same id set, so every entity ends up with a vector in every
/// representation.
///
/// # Example
///
/// ```ignore
/// let storage = EmbeddingAssembler::new()
///     .with_source(JsonSource::from_path(full, "data/full_vectors.json", JsonFormat::default()))
///     .with_source(JsonSource::from_path(pca, "data/pca_vectors.json", JsonFormat::default()))
///     .assemble()?;
/// ```
pub struct EmbeddingAssembler<T: EntityKey> {
    sources: Vec<Box<dyn RepresentationSource<T>>>,
}

impl<T: EntityKey> Default for EmbeddingAssembler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityKey> EmbeddingAssembler<T> {
    /// Creates an assembler with no sources.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Adds a source.
    #[must_use]
    pub fn with_source(mut self, source: impl RepresentationSource<T> + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Adds an already boxed source.
    pub fn add_source(&mut self, source: Box<dyn RepresentationSource<T>>) {
        self.sources.push(source);
    }

    /// Number of sources added so far.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Loads every source and merges them.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::NoSources`] if no source was added
    /// - [`SpaceError::DuplicateRepresentation`] if two sources share a representation
    /// - [`SpaceError::EmptySource`] if a source loads no vectors
    /// - [`SpaceError::IdSetMismatch`] if the id sets are not identical
    /// - [`SpaceError::MissingVector`] on an internal inconsistency
    /// - any error a source reports while loading
    pub fn assemble(self) -> Result<EmbeddingStorage<T>, SpaceError> {
        if self.sources.is_empty() {
            return Err(SpaceError::NoSources);
        }

        let mut seen = BTreeSet::new();
        let mut loaded: Vec<(Representation, BTreeMap<T, Vector>)> =
            Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let rep = source.representation().clone();
            if !seen.insert(rep.clone()) {
                return Err(SpaceError::DuplicateRepresentation(rep));
            }
            let vectors = source.load()?;
            if vectors.is_empty() {
                return Err(SpaceError::EmptySource(rep));
            }
            debug!(
                representation = %rep,
                entities = vectors.len(),
                dimension = ?source.dimension(),
                "loaded representation source"
            );
            loaded.push((rep, vectors));
        }

        let (base_rep, base) = &loaded[0];
        for (rep, vectors) in &loaded[1..] {
            // Both maps are ordered, so equal key sequences mean equal sets.
            if !base.keys().eq(vectors.keys()) {
                return Err(SpaceError::IdSetMismatch {
                    base: base_rep.clone(),
                    representation: rep.clone(),
                    expected: base.len(),
                    actual: vectors.len(),
                });
            }
        }

        let ids: Vec<T> = base.keys().cloned().collect();
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            let mut reps = BTreeMap::new();
            for (rep, vectors) in &mut loaded {
                let vector = vectors.remove(&id).ok_or_else(|| SpaceError::MissingVector {
                    id: format!("{id:?}"),
                    representation: rep.clone(),
                })?;
                reps.insert(rep.clone(), vector);
            }
            entries.push(EmbeddingSingle::new(id, reps)?);
        }

        let storage = EmbeddingStorage::new(entries)?;
        info!(
            entities = storage.iter().len(),
            representations = loaded.len(),
            "assembled embedding storage"
        );
        Ok(storage)
    }
}

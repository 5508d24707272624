//! Exact K-nearest-neighbor search.
//!
//! Scans every id of the group and keeps the K best candidates in a bounded
//! max-heap.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};
use std::sync::Arc;

use latentlens_core::{Representation, Vector};

use super::Neighbor;
use crate::distance::DistanceMetric;
use crate::error::{require_positive, SpaceError};
use crate::store::{EmbeddingGroup, EntityKey};

/// Exact top-K search over one representation of a group.
///
/// The group, representation, and metric are fixed at construction. Each
/// query keeps its heap local, so one instance can serve concurrent callers.
///
/// # Ranking
///
/// Candidates are ordered by `(distance, id)`: among equal distances the
/// smaller id ranks first and is the one kept when the heap is full.
///
/// # Complexity
///
/// O(N log K) time and O(K) space, where N is the number of ids.
///
/// # Example
///
/// ```ignore
/// let knn = NearestNeighbors::new(storage.clone(), Representation::of("full")?, Arc::new(Cosine));
///
/// for n in knn.top_k(&"cat".to_string(), 5)? {
///     println!("{} at distance {}", n.id, n.distance);
/// }
/// ```
pub struct NearestNeighbors<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> {
    group: Arc<G>,
    representation: Representation,
    metric: Arc<dyn DistanceMetric>,
    _id: std::marker::PhantomData<fn() -> T>,
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> Clone for NearestNeighbors<T, G> {
    fn clone(&self) -> Self {
        Self {
            group: Arc::clone(&self.group),
            representation: self.representation.clone(),
            metric: Arc::clone(&self.metric),
            _id: std::marker::PhantomData,
        }
    }
}

/// Heap entry ordered by `(distance, id)` so the worst candidate is on top.
struct MaxHeapEntry<'a, T> {
    distance: f64,
    id: &'a T,
}

impl<T: Ord> PartialEq for MaxHeapEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for MaxHeapEntry<'_, T> {}

impl<T: Ord> PartialOrd for MaxHeapEntry<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for MaxHeapEntry<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance).then_with(|| self.id.cmp(other.id))
    }
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> NearestNeighbors<T, G> {
    /// Creates a search over `representation` of `group` using `metric`.
    #[must_use]
    pub fn new(
        group: Arc<G>,
        representation: Representation,
        metric: Arc<dyn DistanceMetric>,
    ) -> Self {
        Self { group, representation, metric, _id: std::marker::PhantomData }
    }

    /// The metric used for ranking.
    #[must_use]
    pub fn metric(&self) -> &Arc<dyn DistanceMetric> {
        &self.metric
    }

    /// The representation searched.
    #[must_use]
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// The searched group.
    #[must_use]
    pub fn group(&self) -> &Arc<G> {
        &self.group
    }

    /// The `k` nearest neighbors of a stored entity, excluding the entity itself.
    ///
    /// Results are sorted by ascending distance.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidCount`] if `k == 0`, a not-found error if
    /// `query_id` is unknown, and any metric error (dimension mismatch, zero
    /// vector under cosine).
    pub fn top_k(&self, query_id: &T, k: usize) -> Result<Vec<Neighbor<T>>, SpaceError> {
        require_positive(k, "k")?;
        let query = self.group.require(query_id, &self.representation)?;
        self.select(query, k, |id| id == query_id)
    }

    /// The `k` nearest neighbors of an arbitrary vector, skipping ids in `exclude`.
    ///
    /// Results are sorted by ascending distance.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidCount`] if `k == 0`, and any metric error
    /// (dimension mismatch, zero vector under cosine).
    pub fn top_k_vector(
        &self,
        query: &Vector,
        k: usize,
        exclude: &BTreeSet<T>,
    ) -> Result<Vec<Neighbor<T>>, SpaceError> {
        require_positive(k, "k")?;
        self.select(query, k, |id| exclude.contains(id))
    }

    fn select(
        &self,
        query: &Vector,
        k: usize,
        skip: impl Fn(&T) -> bool,
    ) -> Result<Vec<Neighbor<T>>, SpaceError> {
        let mut heap: BinaryHeap<MaxHeapEntry<'_, T>> =
            BinaryHeap::with_capacity(k.saturating_add(1).min(1024));

        for id in self.group.ids() {
            if skip(id) {
                continue;
            }

            let candidate = self.group.require(id, &self.representation)?;
            let entry = MaxHeapEntry { distance: self.metric.distance(query, candidate)?, id };

            if heap.len() < k {
                heap.push(entry);
            } else if let Some(mut worst) = heap.peek_mut() {
                if entry < *worst {
                    *worst = entry;
                }
            }
        }

        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|e| Neighbor::new(e.id.clone(), e.distance))
            .collect())
    }
}

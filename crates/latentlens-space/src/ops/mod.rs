//! Search operators over an [`EmbeddingGroup`](crate::store::EmbeddingGroup).
//!
//! - [`NearestNeighbors`] - Exact top-K search with a bounded max-heap
//!
//! Search is brute force by design: every id is scanned, so results are exact.

mod nearest;

pub use nearest::NearestNeighbors;

/// A search hit: an id and its distance to the query.
///
/// Smaller distance means closer.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<T> {
    /// The id of the matching entity.
    pub id: T,
    /// The distance to the query.
    pub distance: f64,
}

impl<T> Neighbor<T> {
    /// Creates a new neighbor.
    #[must_use]
    pub const fn new(id: T, distance: f64) -> Self {
        Self { id, distance }
    }

    /// Cosine similarity implied by a cosine distance, `1 − distance`.
    ///
    /// Only meaningful when the neighbor came from a cosine search.
    #[must_use]
    pub fn cosine_similarity(&self) -> f64 {
        1.0 - self.distance
    }
}

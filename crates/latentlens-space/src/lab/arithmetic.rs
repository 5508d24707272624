//! Analogy solving and centroid grouping.

use std::collections::BTreeSet;
use std::sync::Arc;

use latentlens_core::{Representation, Vector};

use super::{VectorExpression, VectorExpressionEvaluator};
use crate::distance::DistanceMetric;
use crate::error::{require_positive, SpaceError};
use crate::ops::{NearestNeighbors, Neighbor};
use crate::store::{EmbeddingGroup, EntityKey};

/// A computed vector and the entities nearest to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabResult<T> {
    /// The evaluated expression or centroid.
    pub vector: Vector,
    /// Nearest entities, ascending by distance.
    pub neighbors: Vec<Neighbor<T>>,
}

/// Vector arithmetic composed with nearest-neighbor search.
///
/// Everything happens in one representation, with one metric.
///
/// # Example
///
/// ```ignore
/// let lab = VectorArithmeticLab::new(storage, Representation::of("full")?, Arc::new(Cosine));
/// let expr = VectorExpression::builder().plus("king").minus("man").plus("woman").build()?;
///
/// let result = lab.solve(&expr, 5)?;
/// assert_eq!(result.neighbors[0].id, "queen");
/// ```
pub struct VectorArithmeticLab<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> {
    evaluator: VectorExpressionEvaluator<T, G>,
    neighbors: NearestNeighbors<T, G>,
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> Clone for VectorArithmeticLab<T, G> {
    fn clone(&self) -> Self {
        Self { evaluator: self.evaluator.clone(), neighbors: self.neighbors.clone() }
    }
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> VectorArithmeticLab<T, G> {
    /// Creates a lab over `representation` of `group`, ranking with `metric`.
    #[must_use]
    pub fn new(
        group: Arc<G>,
        representation: Representation,
        metric: Arc<dyn DistanceMetric>,
    ) -> Self {
        let evaluator = VectorExpressionEvaluator::new(Arc::clone(&group), representation.clone());
        let neighbors = NearestNeighbors::new(group, representation, metric);
        Self { evaluator, neighbors }
    }

    /// The evaluator used for expressions.
    #[must_use]
    pub fn evaluator(&self) -> &VectorExpressionEvaluator<T, G> {
        &self.evaluator
    }

    /// The search used for ranking.
    #[must_use]
    pub fn neighbors(&self) -> &NearestNeighbors<T, G> {
        &self.neighbors
    }

    /// Evaluates `expr` and returns the `k` entities nearest to the result.
    ///
    /// Ids appearing in the expression are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidCount`] if `k == 0`, a not-found error for
    /// an unknown id, and any metric error.
    pub fn solve(&self, expr: &VectorExpression<T>, k: usize) -> Result<LabResult<T>, SpaceError> {
        require_positive(k, "k")?;
        let vector = self.evaluator.evaluate(expr)?;
        let neighbors = self.neighbors.top_k_vector(&vector, k, &expr.ids())?;
        Ok(LabResult { vector, neighbors })
    }

    /// Averages the vectors of `selected` and returns the `k` entities nearest
    /// to the centroid.
    ///
    /// With `exclude_selected`, the selected ids are left out of the ranking.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::EmptySelection`] for an empty selection,
    /// [`SpaceError::InvalidCount`] if `k == 0`, [`SpaceError::UnknownId`] for
    /// an id outside the group, and any metric error.
    pub fn group_centroid(
        &self,
        selected: &BTreeSet<T>,
        k: usize,
        exclude_selected: bool,
    ) -> Result<LabResult<T>, SpaceError> {
        if selected.is_empty() {
            return Err(SpaceError::EmptySelection);
        }
        require_positive(k, "k")?;

        let group = self.neighbors.group();
        let rep = self.neighbors.representation();
        let vectors =
            selected.iter().map(|id| group.require(id, rep)).collect::<Result<Vec<_>, _>>()?;
        let vector = Vector::average(vectors)?;

        let empty = BTreeSet::new();
        let exclude = if exclude_selected { selected } else { &empty };
        let neighbors = self.neighbors.top_k_vector(&vector, k, exclude)?;
        Ok(LabResult { vector, neighbors })
    }

    /// The running sums of `expr`, one per term, in the lab's representation.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub fn path(&self, expr: &VectorExpression<T>) -> Result<Vec<Vector>, SpaceError> {
        self.evaluator.partial_sums(expr)
    }
}

//! Projecting a whole vocabulary onto a semantic axis.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

use latentlens_core::Representation;

use super::{ProjectionAxis, ProjectionScore};
use crate::error::{require_positive, SpaceError};
use crate::store::{EmbeddingGroup, EntityKey};

/// Builds axes from anchor ids and scores every id of a group against them.
///
/// All operations scan the group once and are O(N) in the number of ids,
/// plus the final sort. Results are ordered by ascending coordinate, so the
/// list reads from "most A-like" to "most B-like".
///
/// Equal sort keys are broken by ascending id.
pub struct CustomProjectionService<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> {
    group: Arc<G>,
    representation: Representation,
    _id: PhantomData<fn() -> T>,
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> Clone for CustomProjectionService<T, G> {
    fn clone(&self) -> Self {
        Self {
            group: Arc::clone(&self.group),
            representation: self.representation.clone(),
            _id: PhantomData,
        }
    }
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> CustomProjectionService<T, G> {
    /// Creates a service projecting vectors of `representation`.
    #[must_use]
    pub fn new(group: Arc<G>, representation: Representation) -> Self {
        Self { group, representation, _id: PhantomData }
    }

    /// The representation the service reads.
    #[must_use]
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// Axis from `a_id` (origin) towards `b_id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown anchor and
    /// [`SpaceError::IdenticalAnchors`] if both anchors have the same vector.
    pub fn axis_between(&self, a_id: &T, b_id: &T) -> Result<ProjectionAxis, SpaceError> {
        let a = self.group.require(a_id, &self.representation)?;
        let b = self.group.require(b_id, &self.representation)?;
        ProjectionAxis::between(a, b)
    }

    /// Axis through the midpoint of `a_id` and `b_id`, towards `b_id`.
    ///
    /// # Errors
    ///
    /// Same as [`axis_between`](Self::axis_between).
    pub fn centered_axis_between(&self, a_id: &T, b_id: &T) -> Result<ProjectionAxis, SpaceError> {
        let a = self.group.require(a_id, &self.representation)?;
        let b = self.group.require(b_id, &self.representation)?;
        ProjectionAxis::centered_between(a, b)
    }

    /// Scores every id against `axis`, sorted by ascending coordinate.
    ///
    /// When `include_anchors` is false, `a_id` and `b_id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error if the axis does not match the
    /// representation's dimension.
    pub fn project_all(
        &self,
        axis: &ProjectionAxis,
        include_anchors: bool,
        a_id: &T,
        b_id: &T,
    ) -> Result<Vec<ProjectionScore<T>>, SpaceError> {
        let mut scores = self.score_all(axis, include_anchors, a_id, b_id)?;
        scores.sort_by(by_coordinate);
        Ok(scores)
    }

    /// [`axis_between`](Self::axis_between) followed by [`project_all`](Self::project_all).
    ///
    /// # Errors
    ///
    /// Any error of the two steps.
    pub fn semantic_scale(
        &self,
        a_id: &T,
        b_id: &T,
        include_anchors: bool,
    ) -> Result<Vec<ProjectionScore<T>>, SpaceError> {
        let axis = self.axis_between(a_id, b_id)?;
        self.project_all(&axis, include_anchors, a_id, b_id)
    }

    /// The `keep_closest` ids nearest to the A→B axis, sorted by coordinate.
    ///
    /// Anchors take part in the selection and are removed afterwards when
    /// `include_anchors` is false, so fewer than `keep_closest` scores may be
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidCount`] if `keep_closest == 0`, plus any
    /// error of [`axis_between`](Self::axis_between).
    pub fn clean_semantic_scale(
        &self,
        a_id: &T,
        b_id: &T,
        keep_closest: usize,
        include_anchors: bool,
    ) -> Result<Vec<ProjectionScore<T>>, SpaceError> {
        require_positive(keep_closest, "keep_closest")?;
        let axis = self.axis_between(a_id, b_id)?;

        let mut scores = self.score_all(&axis, true, a_id, b_id)?;
        scores.sort_by(|x, y| {
            x.orthogonal_distance.total_cmp(&y.orthogonal_distance).then_with(|| x.id.cmp(&y.id))
        });
        scores.truncate(keep_closest);

        if !include_anchors {
            scores.retain(|s| !is_anchor(&s.id, a_id, b_id));
        }
        scores.sort_by(by_coordinate);
        Ok(scores)
    }

    /// The `top_n` highest-purity ids on the centered A→B axis, sorted by coordinate.
    ///
    /// Anchors are skipped before selection when `include_anchors` is false.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidCount`] if `top_n == 0`, plus any error of
    /// [`centered_axis_between`](Self::centered_axis_between).
    pub fn clean_scale_by_purity(
        &self,
        a_id: &T,
        b_id: &T,
        top_n: usize,
        include_anchors: bool,
    ) -> Result<Vec<ProjectionScore<T>>, SpaceError> {
        require_positive(top_n, "top_n")?;
        let axis = self.centered_axis_between(a_id, b_id)?;

        let mut scores = self.score_all(&axis, include_anchors, a_id, b_id)?;
        scores.sort_by(|x, y| y.purity.total_cmp(&x.purity).then_with(|| x.id.cmp(&y.id)));
        scores.truncate(top_n);
        scores.sort_by(by_coordinate);
        Ok(scores)
    }

    fn score_all(
        &self,
        axis: &ProjectionAxis,
        include_anchors: bool,
        a_id: &T,
        b_id: &T,
    ) -> Result<Vec<ProjectionScore<T>>, SpaceError> {
        let mut scores = Vec::with_capacity(self.group.len());
        for id in self.group.ids() {
            if !include_anchors && is_anchor(id, a_id, b_id) {
                continue;
            }
            let v = self.group.require(id, &self.representation)?;
            let (coordinate, orthogonal_distance) = axis.measure(v)?;
            scores.push(ProjectionScore::new(id.clone(), coordinate, orthogonal_distance));
        }
        Ok(scores)
    }
}

fn is_anchor<T: PartialEq>(id: &T, a_id: &T, b_id: &T) -> bool {
    id == a_id || id == b_id
}

fn by_coordinate<T: Ord>(x: &ProjectionScore<T>, y: &ProjectionScore<T>) -> Ordering {
    x.coordinate.total_cmp(&y.coordinate).then_with(|| x.id.cmp(&y.id))
}

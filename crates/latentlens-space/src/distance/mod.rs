//! Distance metrics for vector comparison.
//!
//! Metrics are strategies behind the [`DistanceMetric`] trait. Every metric
//! defines a distance where smaller means closer, validates dimensions, and
//! exposes a stable [`name`](DistanceMetric::name) that doubles as its
//! selection identifier.
//!
//! Two metrics are provided:
//!
//! - [`Euclidean`] - `sqrt(Σ (aᵢ−bᵢ)²)`
//! - [`Cosine`] - `1 − (a·b)/(‖a‖·‖b‖)`, nominally in `[0, 2]`
//!
//! New metrics implement the trait; callers such as
//! [`NearestNeighbors`](crate::ops::NearestNeighbors) work with any of them.
//!
//! # Example
//!
//! ```
//! use latentlens_core::Vector;
//! use latentlens_space::distance::{metric_by_name, DistanceMetric, Euclidean};
//!
//! let a = Vector::new(vec![0.0, 0.0])?;
//! let b = Vector::new(vec![3.0, 4.0])?;
//! assert_eq!(Euclidean.distance(&a, &b)?, 5.0);
//!
//! let cosine = metric_by_name("Cosine")?;
//! assert_eq!(cosine.name(), "cosine");
//! # Ok::<(), latentlens_space::SpaceError>(())
//! ```

mod scalar;

use std::fmt;
use std::sync::Arc;

use latentlens_core::{canonical_name, CoreError, Vector};

use scalar::{cosine_similarity_with_norms, euclidean_distance};

use crate::error::SpaceError;

/// Strategy for measuring the distance between two vectors.
///
/// Implementations must be pure: the same inputs always give the same
/// distance, and `distance(a, b) == distance(b, a)`.
pub trait DistanceMetric: fmt::Debug + Send + Sync {
    /// Computes the distance between `a` and `b` (smaller = closer).
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ, or if the metric is
    /// undefined for the inputs.
    fn distance(&self, a: &Vector, b: &Vector) -> Result<f64, SpaceError>;

    /// Stable identifier, used for display and for [`metric_by_name`].
    fn name(&self) -> &'static str;
}

/// Euclidean (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &Vector, b: &Vector) -> Result<f64, SpaceError> {
        require_same_dim(a, b)?;
        Ok(euclidean_distance(a.as_slice(), b.as_slice()))
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Cosine distance: `1 − cosine_similarity`.
///
/// Undefined (an error) when either vector has zero length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cosine;

impl DistanceMetric for Cosine {
    fn distance(&self, a: &Vector, b: &Vector) -> Result<f64, SpaceError> {
        require_same_dim(a, b)?;
        let similarity =
            cosine_similarity_with_norms(a.as_slice(), b.as_slice(), a.norm(), b.norm())
                .ok_or(SpaceError::ZeroVectorDistance { metric: self.name() })?;
        Ok(1.0 - similarity)
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

impl fmt::Display for Euclidean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Cosine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn require_same_dim(a: &Vector, b: &Vector) -> Result<(), SpaceError> {
    if a.dim() != b.dim() {
        return Err(CoreError::dimension_mismatch(a.dim(), b.dim()).into());
    }
    Ok(())
}

/// All registered metrics, in display order.
#[must_use]
pub fn available_metrics() -> Vec<Arc<dyn DistanceMetric>> {
    vec![Arc::new(Cosine), Arc::new(Euclidean)]
}

/// Looks up a metric by identifier.
///
/// The identifier is matched case-insensitively, ignoring whitespace.
///
/// # Errors
///
/// Returns [`SpaceError::UnknownMetric`] if no metric has that name.
pub fn metric_by_name(id: &str) -> Result<Arc<dyn DistanceMetric>, SpaceError> {
    let wanted = canonical_name(id);
    available_metrics()
        .into_iter()
        .find(|m| m.name() == wanted)
        .ok_or_else(|| SpaceError::UnknownMetric(id.to_string()))
}

//! Scalar distance kernels over raw component slices.
//!
//! These functions assume equal-length inputs; the metric types in the parent
//! module validate dimensions before calling them.

/// Calculate the squared Euclidean (L2) distance between two slices.
///
/// # Panics
///
/// Debug-panics if slices have different lengths.
#[inline]
#[must_use]
fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Calculate the Euclidean (L2) distance between two slices.
#[inline]
#[must_use]
pub(crate) fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Calculate the dot product between two slices.
#[inline]
#[must_use]
fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Calculate the cosine similarity using pre-computed norms.
///
/// Returns `None` if either norm is zero.
#[inline]
#[must_use]
pub(crate) fn cosine_similarity_with_norms(
    a: &[f64],
    b: &[f64],
    norm_a: f64,
    norm_b: f64,
) -> Option<f64> {
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot_product(a, b) / (norm_a * norm_b))
}

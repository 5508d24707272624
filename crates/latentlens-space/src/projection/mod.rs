//! Semantic axes and whole-vocabulary projection.
//!
//! A [`ProjectionAxis`] is a line through two anchor entities (say "poor" and
//! "rich"). [`CustomProjectionService`] scores every entity against it:
//!
//! - **coordinate** - how far along the axis the entity sits
//! - **orthogonal distance** - how far it sits off the axis
//! - **purity** - `|coordinate| / (orthogonal distance + ε)`
//!
//! and can filter the vocabulary down to the entities that best fit the axis.

mod axis;
mod service;

pub use axis::ProjectionAxis;
pub use service::CustomProjectionService;

/// Guards the purity ratio against division by zero for on-axis points.
pub const PURITY_EPSILON: f64 = 1e-9;

/// One entity's placement relative to an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionScore<T> {
    /// The entity.
    pub id: T,
    /// Signed position along the axis.
    pub coordinate: f64,
    /// Distance from the axis line.
    pub orthogonal_distance: f64,
    /// On-axis progress relative to off-axis deviation; higher is cleaner.
    pub purity: f64,
}

impl<T> ProjectionScore<T> {
    /// Creates a score, deriving purity from the coordinate and distance.
    #[must_use]
    pub fn new(id: T, coordinate: f64, orthogonal_distance: f64) -> Self {
        let purity = purity(coordinate, orthogonal_distance);
        Self { id, coordinate, orthogonal_distance, purity }
    }
}

/// `|coordinate| / (orthogonal_distance + PURITY_EPSILON)`.
#[must_use]
pub fn purity(coordinate: f64, orthogonal_distance: f64) -> f64 {
    coordinate.abs() / (orthogonal_distance + PURITY_EPSILON)
}

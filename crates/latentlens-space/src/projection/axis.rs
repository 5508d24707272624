//! One-dimensional semantic axes.

use latentlens_core::{CoreError, Vector};

use crate::error::SpaceError;

/// A line through vector space: an origin and a unit direction.
///
/// Built from two anchor vectors `A` and `B`. The direction always points
/// from `A` to `B`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionAxis {
    origin: Vector,
    direction: Vector,
}

impl ProjectionAxis {
    /// An axis anchored at `a`, pointing towards `b`.
    ///
    /// `a` projects to `0` and `b` to `‖b − a‖`.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error if the anchors differ in dimension,
    /// and [`SpaceError::IdenticalAnchors`] if `a == b`.
    pub fn between(a: &Vector, b: &Vector) -> Result<Self, SpaceError> {
        let direction = Self::unit_delta(a, b)?;
        Ok(Self { origin: a.clone(), direction })
    }

    /// An axis anchored at the midpoint of `a` and `b`, pointing towards `b`.
    ///
    /// Symmetric: `a` projects to `−‖b − a‖/2` and `b` to `+‖b − a‖/2`.
    ///
    /// # Errors
    ///
    /// Same as [`between`](Self::between).
    pub fn centered_between(a: &Vector, b: &Vector) -> Result<Self, SpaceError> {
        let direction = Self::unit_delta(a, b)?;
        let origin = a.add(b)?.scale(0.5);
        Ok(Self { origin, direction })
    }

    fn unit_delta(a: &Vector, b: &Vector) -> Result<Vector, SpaceError> {
        let delta = b.subtract(a)?;
        match delta.normalize() {
            Ok(unit) => Ok(unit),
            Err(CoreError::ZeroNorm { .. }) => Err(SpaceError::IdenticalAnchors),
            Err(e) => Err(e.into()),
        }
    }

    /// The point the axis measures from.
    #[must_use]
    pub fn origin(&self) -> &Vector {
        &self.origin
    }

    /// The unit direction.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Signed position of `v` along the axis: `(v − origin) · direction`.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error if `v` has another dimension.
    pub fn coordinate_of(&self, v: &Vector) -> Result<f64, SpaceError> {
        Ok(v.subtract(&self.origin)?.dot(&self.direction)?)
    }

    /// Distance from `v` to the axis line.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error if `v` has another dimension.
    pub fn orthogonal_distance_of(&self, v: &Vector) -> Result<f64, SpaceError> {
        self.measure(v).map(|(_, orth)| orth)
    }

    /// Coordinate and orthogonal distance in one pass.
    pub(crate) fn measure(&self, v: &Vector) -> Result<(f64, f64), SpaceError> {
        let offset = v.subtract(&self.origin)?;
        let t = offset.dot(&self.direction)?;
        let residual = offset.subtract(&self.direction.scale(t))?;
        Ok((t, residual.norm()))
    }
}

#[cfg(test)]
mod tests {
    use latentlens_core::ErrorKind;

    use super::*;

    const EPSILON: f64 = 1e-12;

    fn v(values: &[f64]) -> Vector {
        Vector::from_slice(values).unwrap()
    }

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < EPSILON, "{a} != {b}");
    }

    #[test]
    fn between_measures_from_first_anchor() {
        let axis = ProjectionAxis::between(&v(&[1.0, 1.0]), &v(&[4.0, 5.0])).unwrap();
        assert_eq!(axis.origin(), &v(&[1.0, 1.0]));
        assert_near(axis.direction().norm(), 1.0);

        assert_near(axis.coordinate_of(&v(&[1.0, 1.0])).unwrap(), 0.0);
        assert_near(axis.coordinate_of(&v(&[4.0, 5.0])).unwrap(), 5.0);
    }

    #[test]
    fn centered_axis_is_symmetric() {
        let a = v(&[0.0, 0.0]);
        let b = v(&[6.0, 8.0]);
        let axis = ProjectionAxis::centered_between(&a, &b).unwrap();

        assert_eq!(axis.origin(), &v(&[3.0, 4.0]));
        assert_near(axis.coordinate_of(&a).unwrap(), -5.0);
        assert_near(axis.coordinate_of(&b).unwrap(), 5.0);
    }

    #[test]
    fn orthogonal_distance_is_residual_length() {
        let axis = ProjectionAxis::between(&v(&[0.0, 0.0]), &v(&[1.0, 0.0])).unwrap();
        let point = v(&[3.0, -2.0]);

        assert_near(axis.coordinate_of(&point).unwrap(), 3.0);
        assert_near(axis.orthogonal_distance_of(&point).unwrap(), 2.0);
        assert_near(axis.orthogonal_distance_of(&v(&[7.0, 0.0])).unwrap(), 0.0);
    }

    #[test]
    fn identical_anchors_rejected() {
        let a = v(&[1.0, 2.0]);
        let err = ProjectionAxis::between(&a, &a.clone()).unwrap_err();
        assert!(matches!(err, SpaceError::IdenticalAnchors));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(ProjectionAxis::centered_between(&a, &a).is_err());
    }

    #[test]
    fn dimension_mismatch_rejected() {
        let err = ProjectionAxis::between(&v(&[1.0, 2.0]), &v(&[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, SpaceError::Core(CoreError::DimensionMismatch { .. })));

        let axis = ProjectionAxis::between(&v(&[0.0, 0.0]), &v(&[1.0, 0.0])).unwrap();
        assert!(axis.coordinate_of(&v(&[1.0])).is_err());
        assert!(axis.orthogonal_distance_of(&v(&[1.0, 2.0, 3.0])).is_err());
    }
}

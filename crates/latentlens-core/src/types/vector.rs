//! Immutable dense vectors.
//!
//! [`Vector`] is the numeric foundation of every other latentlens type. All
//! operations are pure: they return a new vector and never touch `self` or
//! their arguments.
//!
//! # Example
//!
//! ```
//! use latentlens_core::Vector;
//!
//! let king = Vector::new(vec![10.0, 1.0])?;
//! let man = Vector::new(vec![2.0, 0.0])?;
//! let woman = Vector::new(vec![2.0, 1.0])?;
//!
//! let queen = king.subtract(&man)?.add(&woman)?;
//! assert_eq!(queen.as_slice(), &[10.0, 2.0]);
//! # Ok::<(), latentlens_core::CoreError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An immutable, fixed-dimension vector of `f64` components.
///
/// The components live behind an `Arc`, so clones are cheap and a vector can
/// be shared between threads and between the entries of a store.
///
/// Equality and hashing are structural and bitwise per component, so `Vector`
/// can be used as a map key: `0.0` and `-0.0` are distinct, and a `NaN`
/// component equals the same `NaN` bit pattern.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Arc<[f64]>,
}

impl Vector {
    /// Creates a vector that takes ownership of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyVector`] if `values` is empty.
    pub fn new(values: Vec<f64>) -> Result<Self, CoreError> {
        if values.is_empty() {
            return Err(CoreError::EmptyVector);
        }
        Ok(Self { data: values.into() })
    }

    /// Creates a vector by copying `values`.
    ///
    /// The caller keeps its buffer and may mutate it freely afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyVector`] if `values` is empty.
    pub fn from_slice(values: &[f64]) -> Result<Self, CoreError> {
        Self::new(values.to_vec())
    }

    /// Number of components.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Read-only view of the components.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Owned copy of the components.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfBounds`] if `index >= dim`.
    pub fn get(&self, index: usize) -> Result<f64, CoreError> {
        self.data
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOutOfBounds { index, dim: self.dim() })
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, CoreError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the dimensions differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, CoreError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every component by `alpha`.
    #[must_use]
    pub fn scale(&self, alpha: f64) -> Self {
        Self { data: self.data.iter().map(|x| alpha * x).collect() }
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<f64, CoreError> {
        self.require_same_dim(other)?;
        Ok(self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum())
    }

    /// Squared L2 norm, `Σ xᵢ²`.
    #[inline]
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    /// L2 norm (Euclidean length).
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ZeroNorm`] if the norm is exactly zero.
    pub fn normalize(&self) -> Result<Self, CoreError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(CoreError::ZeroNorm { operation: "normalize" });
        }
        Ok(Self { data: self.data.iter().map(|x| x / n).collect() })
    }

    /// Component-wise mean of a non-empty collection of equal-dimension vectors.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAverage`] for an empty collection and
    /// [`CoreError::DimensionMismatch`] if the dimensions are mixed.
    pub fn average<'a, I>(vectors: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = vectors.into_iter();
        let first = iter.next().ok_or(CoreError::EmptyAverage)?;
        let dim = first.dim();
        let mut sum = first.to_vec();
        let mut count = 1usize;

        for v in iter {
            if v.dim() != dim {
                return Err(CoreError::dimension_mismatch(dim, v.dim()));
            }
            for (acc, x) in sum.iter_mut().zip(v.data.iter()) {
                *acc += x;
            }
            count += 1;
        }

        let n = count as f64;
        for acc in &mut sum {
            *acc /= n;
        }
        Self::new(sum)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self, CoreError> {
        self.require_same_dim(other)?;
        Ok(Self { data: self.data.iter().zip(other.data.iter()).map(|(a, b)| f(*a, *b)).collect() })
    }

    fn require_same_dim(&self, other: &Self) -> Result<(), CoreError> {
        if self.dim() != other.dim() {
            return Err(CoreError::dimension_mismatch(self.dim(), other.dim()));
        }
        Ok(())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim()
            && self.data.iter().zip(other.data.iter()).all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dim().hash(state);
        for x in self.data.iter() {
            x.to_bits().hash(state);
        }
    }
}

// Large embeddings would flood logs; print only the shape.
impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(dim={})", self.dim())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(dim={})", self.dim())
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = CoreError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.to_vec()
    }
}

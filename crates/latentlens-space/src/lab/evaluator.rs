//! Evaluating vector expressions against a group.

use std::marker::PhantomData;
use std::sync::Arc;

use latentlens_core::{Representation, Vector};

use super::{Sign, Term, VectorExpression};
use crate::error::SpaceError;
use crate::store::{EmbeddingGroup, EntityKey};

/// Turns a [`VectorExpression`] into a vector of one representation.
///
/// The first term's vector (negated for a minus sign) seeds the accumulator;
/// each later term is added or subtracted strictly left to right, so results
/// are bit-for-bit reproducible.
pub struct VectorExpressionEvaluator<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> {
    group: Arc<G>,
    representation: Representation,
    _id: PhantomData<fn() -> T>,
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> Clone for VectorExpressionEvaluator<T, G> {
    fn clone(&self) -> Self {
        Self {
            group: Arc::clone(&self.group),
            representation: self.representation.clone(),
            _id: PhantomData,
        }
    }
}

impl<T: EntityKey, G: EmbeddingGroup<T> + ?Sized> VectorExpressionEvaluator<T, G> {
    /// Creates an evaluator reading `representation`.
    #[must_use]
    pub fn new(group: Arc<G>, representation: Representation) -> Self {
        Self { group, representation, _id: PhantomData }
    }

    /// The representation expressions are evaluated in.
    #[must_use]
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// The final value of `expr`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, or a dimension mismatch.
    pub fn evaluate(&self, expr: &VectorExpression<T>) -> Result<Vector, SpaceError> {
        let mut acc: Option<Vector> = None;
        for term in expr.terms() {
            acc = Some(self.step(acc.as_ref(), term)?);
        }
        acc.ok_or(SpaceError::EmptyExpression)
    }

    /// The running value after each term; the last element equals [`evaluate`](Self::evaluate).
    ///
    /// # Errors
    ///
    /// Same as [`evaluate`](Self::evaluate).
    pub fn partial_sums(&self, expr: &VectorExpression<T>) -> Result<Vec<Vector>, SpaceError> {
        let mut sums: Vec<Vector> = Vec::with_capacity(expr.terms().len());
        for term in expr.terms() {
            let next = self.step(sums.last(), term)?;
            sums.push(next);
        }
        Ok(sums)
    }

    fn step(&self, acc: Option<&Vector>, term: &Term<T>) -> Result<Vector, SpaceError> {
        let v = self.group.require(term.id(), &self.representation)?;
        let next = match (acc, term.sign()) {
            (None, Sign::Plus) => v.clone(),
            (None, Sign::Minus) => v.scale(-1.0),
            (Some(acc), Sign::Plus) => acc.add(v)?,
            (Some(acc), Sign::Minus) => acc.subtract(v)?,
        };
        Ok(next)
    }
}

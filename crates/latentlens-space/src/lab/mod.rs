//! Vector arithmetic over stored entities.
//!
//! - [`VectorExpression`] - Signed terms such as `king − man + woman`
//! - [`VectorExpressionEvaluator`] - Evaluates expressions (and their running sums)
//! - [`VectorArithmeticLab`] - Analogy solving and centroid grouping on top of
//!   [`NearestNeighbors`](crate::ops::NearestNeighbors)

mod arithmetic;
mod evaluator;
mod expression;

pub use arithmetic::{LabResult, VectorArithmeticLab};
pub use evaluator::VectorExpressionEvaluator;
pub use expression::{Sign, Term, VectorExpression, VectorExpressionBuilder};

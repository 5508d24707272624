//! Core data types.
//!
//! - [`Vector`] - An immutable dense vector with pure algebra
//! - [`Representation`] - A canonical name for a vector space

mod representation;
mod vector;

pub use representation::{canonical_name, Representation};
pub use vector::Vector;

//! Test data generators and on-disk datasets for latentlens tests.
//!
//! Everything here is seeded, so datasets are reproducible across runs.

pub mod generators;

pub use generators::{Dataset, Rng};

//! `latentlens` Core
//!
//! This crate provides the numeric and naming primitives shared by every
//! other latentlens crate.
//!
//! # Overview
//!
//! - **Vectors**: [`Vector`] is an immutable, fixed-dimension vector with
//!   add, subtract, scale, dot, norm, normalize, and average
//! - **Representations**: [`Representation`] canonically names a vector space
//!   (e.g. `full`, `pca`)
//! - **Errors**: [`CoreError`] and the shared [`ErrorKind`] taxonomy
//!
//! # Example
//!
//! ```
//! use latentlens_core::{Representation, Vector};
//!
//! let full = Representation::of("FULL")?;
//! assert_eq!(full.name(), "full");
//!
//! let a = Vector::new(vec![0.0, 0.0])?;
//! let b = Vector::new(vec![3.0, 4.0])?;
//! assert_eq!(b.subtract(&a)?.norm(), 5.0);
//! # Ok::<(), latentlens_core::CoreError>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;


pub use error::{CoreError, ErrorKind};
pub use types::{canonical_name, Representation, Vector};

//! `latentlens` Space
//!
//! This crate provides the embedding store and the search primitives that run
//! over it.
//!
//! # Overview
//!
//! - **Storage**: entities with one vector per named representation, built
//!   once from per-representation sources and immutable afterwards
//! - **Distance functions**: Cosine and Euclidean behind one trait
//! - **Search**: exact top-K nearest neighbors
//! - **Projection**: semantic axes between two anchors, with purity and
//!   proximity filtering
//! - **Arithmetic**: analogy solving (`king − man + woman`) and centroid grouping
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use std::sync::Arc;
//!
//! use latentlens_core::{Representation, Vector};
//! use latentlens_space::distance::Euclidean;
//! use latentlens_space::lab::{VectorArithmeticLab, VectorExpression};
//! use latentlens_space::source::InMemorySource;
//! use latentlens_space::store::EmbeddingAssembler;
//!
//! let full = Representation::of("full")?;
//! let vectors = BTreeMap::from([
//!     ("king".to_string(), Vector::new(vec![10.0, 1.0])?),
//!     ("man".to_string(), Vector::new(vec![2.0, 0.0])?),
//!     ("woman".to_string(), Vector::new(vec![2.0, 1.0])?),
//!     ("queen".to_string(), Vector::new(vec![10.0, 2.0])?),
//! ]);
//! let storage = EmbeddingAssembler::new()
//!     .with_source(InMemorySource::new(full.clone(), vectors))
//!     .assemble()?;
//!
//! let lab = VectorArithmeticLab::new(Arc::new(storage), full, Arc::new(Euclidean));
//! let expr = VectorExpression::builder()
//!     .plus("king".to_string())
//!     .minus("man".to_string())
//!     .plus("woman".to_string())
//!     .build()?;
//!
//! let result = lab.solve(&expr, 1)?;
//! assert_eq!(result.neighbors[0].id, "queen");
//! # Ok::<(), latentlens_space::SpaceError>(())
//! ```
//!
//! # Modules
//!
//! - [`store`] - Entities, the group trait, storage, and the assembler
//! - [`source`] - Per-representation inputs (in-memory, JSON)
//! - [`distance`] - Distance metrics and the metric registry
//! - [`ops`] - Nearest-neighbor search
//! - [`projection`] - Semantic axes and vocabulary projection
//! - [`lab`] - Vector expressions, analogies, and centroids
//! - [`error`] - Error types

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod distance;
pub mod error;
pub mod lab;
pub mod ops;
pub mod projection;
pub mod source;
pub mod store;


pub use distance::{available_metrics, metric_by_name, Cosine, DistanceMetric, Euclidean};
pub use error::SpaceError;
pub use lab::{LabResult, Term, VectorArithmeticLab, VectorExpression};
pub use ops::{NearestNeighbors, Neighbor};
pub use projection::{CustomProjectionService, ProjectionAxis, ProjectionScore};
pub use source::{InMemorySource, JsonFormat, JsonSource, RepresentationSource};
pub use store::{EmbeddingAssembler, EmbeddingGroup, EmbeddingSingle, EmbeddingStorage, EntityKey};

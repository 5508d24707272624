//! Multi-representation embedding storage.
//!
//! This module provides the entity model every search component reads from:
//!
//! - [`EmbeddingSingle`] - One entity's vectors, keyed by
//!   [`Representation`](latentlens_core::Representation)
//! - [`EmbeddingGroup`] - The read-only query trait over a set of entities
//! - [`EmbeddingStorage`] - The immutable in-memory [`EmbeddingGroup`]
//! - [`EmbeddingAssembler`] - Merges per-representation sources into a storage
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use latentlens_core::{Representation, Vector};
//! use latentlens_space::source::InMemorySource;
//! use latentlens_space::store::{EmbeddingAssembler, EmbeddingGroup};
//!
//! let full = InMemorySource::new(
//!     Representation::of("full")?,
//!     BTreeMap::from([
//!         ("cat".to_string(), Vector::new(vec![1.0, 0.0, 0.0])?),
//!         ("dog".to_string(), Vector::new(vec![0.0, 1.0, 0.0])?),
//!     ]),
//! );
//! let pca = InMemorySource::new(
//!     Representation::of("pca")?,
//!     BTreeMap::from([
//!         ("cat".to_string(), Vector::new(vec![1.0, 0.0])?),
//!         ("dog".to_string(), Vector::new(vec![0.0, 1.0])?),
//!     ]),
//! );
//!
//! let storage = EmbeddingAssembler::new().with_source(full).with_source(pca).assemble()?;
//! assert_eq!(storage.len(), 2);
//! assert_eq!(storage.available_representations().len(), 2);
//! # Ok::<(), latentlens_space::SpaceError>(())
//! ```

mod assembler;
mod group;
mod single;
mod storage;

use std::fmt::Debug;

pub use assembler::EmbeddingAssembler;
pub use group::EmbeddingGroup;
pub use single::EmbeddingSingle;
pub use storage::EmbeddingStorage;

/// Bounds required of an entity id.
///
/// Ids are ordered so scans and tie-breaks are deterministic, and printable
/// so errors can name them.
pub trait EntityKey: Clone + Ord + Debug + Send + Sync {}

impl<T: Clone + Ord + Debug + Send + Sync> EntityKey for T {}

//! # latentlens
//!
//! Explore multi-representation embedding spaces: nearest neighbors, semantic
//! axes, and vector arithmetic over vectors loaded from JSON.
//!
//! This crate ties the building blocks of [`latentlens_space`] into one
//! session type, [`Explorer`], configured from TOML with [`ExplorerConfig`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//!
//! use latentlens::{Explorer, ExplorerConfig, VectorExpression};
//!
//! latentlens::init_tracing();
//!
//! let config = ExplorerConfig::load(Path::new("latentlens.toml"))?;
//! let mut explorer = Explorer::load(config)?;
//!
//! // Nearest neighbors in the search representation
//! for n in explorer.nearest_neighbors("cat", 5)? {
//!     println!("{}  dist={:.5}  sim={:.5}", n.id, n.distance, n.cosine_similarity());
//! }
//!
//! // king − man + woman
//! let expr = VectorExpression::builder()
//!     .plus("king".to_string())
//!     .minus("man".to_string())
//!     .plus("woman".to_string())
//!     .build()?;
//! let answer = explorer.solve(&expr, 3)?;
//!
//! // A semantic scale from "poor" to "rich", filtered by purity
//! let scale = explorer.custom_projection_scale("poor", "rich", 20, true, true)?;
//!
//! explorer.set_metric("euclidean")?;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - TOML configuration
//! - [`explorer`] - The session type
//! - [`error`] - Error types

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod explorer;
mod logging;

pub use config::{ExplorerConfig, SourceConfig};
pub use error::{Error, Result};
pub use explorer::Explorer;
pub use logging::init_tracing;

pub use latentlens_core::{ErrorKind, Representation, Vector};
pub use latentlens_space::{
    LabResult, Neighbor, ProjectionScore, SpaceError, Term, VectorExpression,
};

//! Explorer configuration.
//!
//! # Example Configuration
//!
//! ```toml
//! search_representation = "full"
//! display_representation = "pca"
//! metric = "cosine"
//! default_k = 10
//!
//! [[sources]]
//! representation = "full"
//! path = "data/full_vectors.json"
//!
//! [[sources]]
//! representation = "pca"
//! path = "data/pca_vectors.json"
//! id_field = "word"
//! vector_field = "vector"
//! ```
//!
//! Relative source paths are resolved against the directory of the config
//! file when loaded with [`ExplorerConfig::load`].

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use latentlens_core::Representation;
use latentlens_space::distance::metric_by_name;
use latentlens_space::source::JsonFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Session configuration for an [`Explorer`](crate::Explorer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Representation used for neighbors, projection, and arithmetic.
    #[serde(default = "default_search_representation")]
    pub search_representation: String,

    /// Representation arithmetic paths are reported in.
    #[serde(default = "default_display_representation")]
    pub display_representation: String,

    /// Metric identifier (`cosine` or `euclidean`).
    #[serde(default = "default_metric")]
    pub metric: String,

    /// Neighbor count used when the caller does not give one.
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// One JSON file per representation.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

/// A JSON vector file and the representation it provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Representation name, e.g. `full`.
    pub representation: String,

    /// Path to the JSON file.
    pub path: PathBuf,

    /// Name of the id field in each object.
    #[serde(default = "default_id_field")]
    pub id_field: String,

    /// Name of the vector field in each object.
    #[serde(default = "default_vector_field")]
    pub vector_field: String,
}

fn default_search_representation() -> String {
    "full".to_string()
}

fn default_display_representation() -> String {
    "pca".to_string()
}

fn default_metric() -> String {
    "cosine".to_string()
}

const fn default_k() -> usize {
    10
}

fn default_id_field() -> String {
    JsonFormat::default().id_field
}

fn default_vector_field() -> String {
    JsonFormat::default().vector_field
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            search_representation: default_search_representation(),
            display_representation: default_display_representation(),
            metric: default_metric(),
            default_k: default_k(),
            sources: Vec::new(),
        }
    }
}

impl ExplorerConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|source| Error::ReadConfig { path: path.to_path_buf(), source })?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            for source in &mut config.sources {
                if source.path.is_relative() {
                    source.path = base.join(&source.path);
                }
            }
        }
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Source paths are kept as written.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails
    /// [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Adds a JSON source with the default field names.
    #[must_use]
    pub fn with_source(
        mut self,
        representation: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.sources.push(SourceConfig {
            representation: representation.into(),
            path: path.into(),
            id_field: default_id_field(),
            vector_field: default_vector_field(),
        });
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Fails for an unknown metric, `default_k == 0`, a blank representation
    /// name, two sources naming the same representation, or a source with
    /// unusable field names.
    pub fn validate(&self) -> Result<()> {
        metric_by_name(&self.metric)?;

        if self.default_k == 0 {
            return Err(Error::InvalidConfig("default_k must be >= 1".to_string()));
        }

        self.search_representation()?;
        self.display_representation()?;

        let mut seen = BTreeSet::new();
        for source in &self.sources {
            let rep = source.representation()?;
            if !seen.insert(rep.clone()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate source for representation '{rep}'"
                )));
            }
            source.format()?;
        }

        Ok(())
    }

    /// The parsed search representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn search_representation(&self) -> Result<Representation> {
        Ok(Representation::of(&self.search_representation)?)
    }

    /// The parsed display representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn display_representation(&self) -> Result<Representation> {
        Ok(Representation::of(&self.display_representation)?)
    }
}

impl SourceConfig {
    /// The parsed representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn representation(&self) -> Result<Representation> {
        Ok(Representation::of(&self.representation)?)
    }

    /// The JSON field names.
    ///
    /// # Errors
    ///
    /// Returns an error if either field name is blank or both are the same.
    pub fn format(&self) -> Result<JsonFormat> {
        Ok(JsonFormat::new(self.id_field.clone(), self.vector_field.clone())?)
    }
}

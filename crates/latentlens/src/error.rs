//! Error types for the explorer crate.

use std::path::PathBuf;

use latentlens_core::{CoreError, ErrorKind};
use latentlens_space::SpaceError;
use thiserror::Error;

/// Errors that can occur when configuring or using an [`Explorer`](crate::Explorer).
#[derive(Debug, Error)]
pub enum Error {
    /// A storage, search, projection, or arithmetic operation failed.
    #[error(transparent)]
    Space(#[from] SpaceError),

    /// A vector or representation name was invalid.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`ExplorerConfig`](crate::ExplorerConfig).
    #[error("config parse error: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// The configuration parsed but its values are inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Space(e) => e.kind(),
            Self::Core(e) => e.kind(),
            Self::ReadConfig { .. } | Self::ParseConfig(_) => ErrorKind::Io,
            Self::InvalidConfig(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type for explorer operations.
pub type Result<T> = std::result::Result<T, Error>;

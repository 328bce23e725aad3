//! Error types for stores and configuration

use crate::record::ProjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a [`ProjectStore`](crate::ProjectStore)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(ProjectId),

    #[error("storage error: {0}")]
    Sled(#[from] sled::Error),

    #[error("failed to encode or decode record: {0}")]
    Codec(#[from] bincode::Error),
}

/// Failure loading, validating or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("could not determine the user configuration directory")]
    NoConfigDir,
}

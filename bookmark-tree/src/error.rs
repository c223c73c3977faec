use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors raised while loading a bookmark configuration.
///
/// Malformed entries *inside* a tree are not errors; they are kept as
/// [`Node::Other`](crate::data::Node::Other) and skipped by the views.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The configuration file could not be read.
    #[error("can not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax error.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML syntax error.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax error, or a TOML value that could not be converted.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is not `yaml`, `yml`, `toml` or `json`.
    #[error("unsupported config file extension: {0:?}")]
    UnsupportedFormat(String),

    /// The top-level value is not a key/value mapping.
    #[error("config root must be a mapping, found: {0}")]
    NotAMapping(String),
}

//! Error types for labeler-rules

use std::path::PathBuf;

/// Result type for labeler-rules operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`Config`](crate::Config).
///
/// Resolution itself never fails; every variant here is a configuration
/// error surfaced before any path is classified.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid label template {template:?} for pattern {pattern}")]
    InvalidTemplate { pattern: String, template: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse {format} config from {origin}: {message}")]
    ConfigParse {
        origin: String,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

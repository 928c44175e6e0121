//! Errors raised while reading operation documents and configuration.
//!
//! Generation itself is total; only ingestion can fail.

use std::path::PathBuf;

/// Result alias for fallible ingestion.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// An operation document is not valid JSON or does not match the expected shape.
    #[error("invalid operation document: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration file is not valid TOML or has unknown values.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// An annotated field key is empty once its `!` and `[]` markers are stripped.
    #[error("field key `{key}` has an empty name once its markers are stripped")]
    EmptyFieldName {
        /// The offending key as written
        key: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

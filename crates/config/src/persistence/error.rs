//! Error types for shortcut persistence.
//!
//! Invariants:
//! - Every variant carries the path it concerns, except serialization failures.
//! - An unknown scope is an error; an unknown shortcut identifier is not.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving the shortcuts file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read shortcuts file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse shortcuts file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A record names a scope this build does not define.
    #[error("Shortcut '{identifier}' in {path} references unknown scope '{scope}'")]
    UnknownScope {
        path: PathBuf,
        identifier: String,
        scope: String,
    },

    #[error("Failed to serialize shortcuts: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write shortcuts file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),
}

impl PersistenceError {
    /// True for failures caused by the file's content rather than I/O.
    ///
    /// Such files can be backed up and replaced without losing anything the
    /// application could have read.
    pub fn is_corrupt_file(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnknownScope { .. })
    }
}

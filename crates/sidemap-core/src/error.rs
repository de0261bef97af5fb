//! Error types for the Sidemap workspace.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading or validating a sidebar manifest.
///
/// Marked `#[non_exhaustive]` to allow adding new error types without
/// breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Manifest content could not be parsed (malformed JSON, wrong shape).
    #[error("Parse error: {message}")]
    Parse {
        /// What went wrong
        message: String,
    },

    /// Manifest parsed but failed schema validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Tree path or field that failed validation
        path: Option<String>,
        /// What went wrong
        message: String,
    },

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error with the path that was being accessed.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Named sidebar not present in the manifest.
    #[error("Sidebar not found: {name}")]
    SidebarNotFound {
        /// Sidebar name that was requested
        name: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Sidemap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            path: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with the tree path that failed.
    pub fn validation_at<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            path: Some(path.into()),
            message: message.into(),
        }
    }

    /// Creates a new I/O error carrying the path that was being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

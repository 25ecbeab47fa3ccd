//! Error types for MusicScroll core operations.
//!
//! Feed operations themselves never fail: an empty playlist is reported as
//! `None`, a cancelled file pick is a no-op. These errors cover the ambient
//! edges (configuration files, parsing names coming from the outside).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in MusicScroll core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is present but invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system operation failed.
    #[error("File system error at {path}: {message}")]
    FileSystem {
        /// Path where the error occurred.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Theme name outside the fixed palette.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// View mode name not recognised.
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

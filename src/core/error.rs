//! Error types and error handling for the newsdesk service.
//!
//! This module defines the error types used throughout the
//! application. The search algorithms themselves (KMP, trie) are
//! infallible; errors arise only at the edges: feed loading,
//! configuration, and snapshot persistence.

use thiserror::Error;

/// Result type alias for newsdesk operations
pub type Result<T> = std::result::Result<T, NewsdeskError>;

/// Main error type for the newsdesk service
#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Feed unavailable: {0}")]
    FeedFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("No word index has been saved yet: {0}")]
    IndexNotFound(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("Snapshot data is corrupt under key '{key}': {message}")]
    SnapshotCorrupt { key: String, message: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl NewsdeskError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NewsdeskError::IndexNotFound(_) | NewsdeskError::SnapshotNotFound(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            NewsdeskError::InvalidQuery(_) | NewsdeskError::ConfigError(_)
        )
    }
}

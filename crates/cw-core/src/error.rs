//! Error types for comment-widget

use crate::types::CommentId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comment-widget
#[derive(Debug, Error)]
pub enum CwError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed data could not be used
    #[error("Invalid seed data: {0}")]
    Seed(String),

    /// Two records in the tree share an id
    #[error("Duplicate id in comment tree: {0}")]
    DuplicateId(CommentId),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CwError>,
    },
}

impl CwError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CwError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for CwError {
    fn from(err: toml::de::Error) -> Self {
        CwError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CwError {
    fn from(err: toml::ser::Error) -> Self {
        CwError::Toml(err.to_string())
    }
}

/// Result type alias for comment-widget
pub type Result<T> = std::result::Result<T, CwError>;

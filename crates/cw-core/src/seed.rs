//! Seed data loading
//!
//! A seed is the starting comment tree, optionally with the identity of the
//! user running the widget:
//!
//! ```json
//! { "currentUser": { "username": "...", "image": { ... } }, "comments": [ ... ] }
//! ```

use crate::comment::{Comment, CommentStore, TreeValidator};
use crate::error::{CwError, Result};
use crate::types::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Demo dataset compiled into the binary
const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Username used when nothing else names the current user
pub const DEFAULT_USERNAME: &str = "juliusomo";

/// Initial dataset for the widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<User>,
    pub comments: Vec<Comment>,
}

impl SeedData {
    /// Parse and validate a seed from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        TreeValidator::new().validate(&seed.comments)?;
        Ok(seed)
    }

    /// Load a seed file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CwError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let seed = Self::from_json(&content)
            .map_err(|e| e.with_context(format!("Failed to load seed {}", path.display())))?;

        info!(
            "Loaded seed {:?} with {} comments",
            path,
            seed.comments.len()
        );
        Ok(seed)
    }

    /// The embedded demo dataset
    pub fn builtin() -> Result<Self> {
        debug!("Using built-in seed");
        Self::from_json(BUILTIN_SEED)
    }

    /// Load from `path`, or fall back to the embedded dataset
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Build a store, attributing new records to `current_user`
    pub fn into_store(self, current_user: User) -> Result<CommentStore> {
        CommentStore::with_comments(current_user, self.comments)
    }
}

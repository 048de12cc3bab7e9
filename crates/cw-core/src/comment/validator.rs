//! Comment tree validation

use super::model::Comment;
use crate::error::{CwError, Result};
use crate::types::CommentId;
use std::collections::HashSet;

/// Validator for a whole comment tree
#[derive(Debug, Default)]
pub struct TreeValidator;

impl TreeValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate that ids are unique across comments and replies
    pub fn validate_ids(&self, comments: &[Comment]) -> Result<()> {
        let mut seen: HashSet<CommentId> = HashSet::new();

        for comment in comments {
            if !seen.insert(comment.id) {
                return Err(CwError::DuplicateId(comment.id));
            }
            for reply in &comment.replies {
                if !seen.insert(reply.id) {
                    return Err(CwError::DuplicateId(reply.id));
                }
            }
        }

        Ok(())
    }

    /// Validate that every author has a username
    pub fn validate_authors(&self, comments: &[Comment]) -> Result<()> {
        for comment in comments {
            if comment.author.username.trim().is_empty() {
                return Err(CwError::Seed(format!(
                    "Comment {} has an author without a username",
                    comment.id
                )));
            }
            for reply in &comment.replies {
                if reply.author.username.trim().is_empty() {
                    return Err(CwError::Seed(format!(
                        "Reply {} has an author without a username",
                        reply.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate a complete tree
    pub fn validate(&self, comments: &[Comment]) -> Result<()> {
        self.validate_ids(comments)?;
        self.validate_authors(comments)?;
        Ok(())
    }
}

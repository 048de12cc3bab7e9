//! Core type definitions for comment-widget

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label given to records created during the session
pub const CREATED_JUST_NOW: &str = "Just now";

/// Directory avatars are resolved from
pub const AVATAR_DIR: &str = "./images/avatars";

/// Unique identifier for a comment or reply
///
/// Comments and replies share one id space, so a single id is enough to find
/// any unit in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl CommentId {
    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CommentId {
    fn from(value: u64) -> Self {
        CommentId(value)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Avatar image locations for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarImage {
    pub png: String,
    pub webp: String,
}

impl AvatarImage {
    /// Resolve the avatar paths for a username
    pub fn for_username(username: &str) -> Self {
        Self {
            png: format!("{}/image-{}.png", AVATAR_DIR, username),
            webp: format!("{}/image-{}.webp", AVATAR_DIR, username),
        }
    }
}

/// Author of a comment or reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique within the session
    pub username: String,
    #[serde(rename = "image")]
    pub avatar: AvatarImage,
}

impl User {
    /// Create a user with explicit avatar paths
    pub fn new(username: impl Into<String>, avatar: AvatarImage) -> Self {
        Self {
            username: username.into(),
            avatar,
        }
    }

    /// Create a user whose avatar follows the naming convention
    pub fn with_conventional_avatar(username: impl Into<String>) -> Self {
        let username = username.into();
        let avatar = AvatarImage::for_username(&username);
        Self { username, avatar }
    }

    /// Users are the same person when their usernames match
    pub fn is(&self, other: &User) -> bool {
        self.username == other.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

/// What the active unit is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetMode {
    /// Content is being rewritten
    Editing,
    /// A reply is being composed
    Replying,
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetMode::Editing => write!(f, "editing"),
            TargetMode::Replying => write!(f, "replying"),
        }
    }
}

/// The single comment or reply currently being edited or replied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveTarget {
    pub id: CommentId,
    pub mode: TargetMode,
}

impl ActiveTarget {
    /// Target a unit for editing
    pub fn editing(id: CommentId) -> Self {
        Self {
            id,
            mode: TargetMode::Editing,
        }
    }

    /// Target a unit for replying
    pub fn replying(id: CommentId) -> Self {
        Self {
            id,
            mode: TargetMode::Replying,
        }
    }
}

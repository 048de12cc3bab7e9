//! Comment data models

use crate::types::{CommentId, User};
use serde::{Deserialize, Serialize};

/// A top-level comment and its replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Comment content
    pub content: String,
    /// Display label for when the comment was written
    pub created_at: String,
    /// Stored score; votes cast in the widget never change it
    pub score: i64,
    /// Author of the comment
    #[serde(rename = "user")]
    pub author: User,
    /// Replies, newest first for replies added in the session
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Comment {
    /// Replace the content
    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Get a reply by ID
    pub fn reply(&self, id: CommentId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    /// Check if a reply with this ID exists
    pub fn has_reply(&self, id: CommentId) -> bool {
        self.replies.iter().any(|r| r.id == id)
    }
}

/// A reply nested under a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Unique reply identifier, shared id space with comments
    pub id: CommentId,
    /// Reply content
    pub content: String,
    /// Display label for when the reply was written
    pub created_at: String,
    /// Stored score
    pub score: i64,
    /// Username of the author being answered
    #[serde(
        rename = "replyingTo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub replying_to: Option<String>,
    /// Author of the reply
    #[serde(rename = "user")]
    pub author: User,
}

impl Reply {
    /// Replace the content
    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// Whether a unit is a top-level comment or a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Comment,
    Reply,
}

/// Borrowed view of any unit in the tree
#[derive(Debug, Clone, Copy)]
pub enum UnitRef<'a> {
    /// A top-level comment
    Comment(&'a Comment),
    /// A reply with the id of the comment that owns it
    Reply {
        comment_id: CommentId,
        reply: &'a Reply,
    },
}

impl<'a> UnitRef<'a> {
    pub fn id(&self) -> CommentId {
        match self {
            UnitRef::Comment(c) => c.id,
            UnitRef::Reply { reply, .. } => reply.id,
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            UnitRef::Comment(_) => UnitKind::Comment,
            UnitRef::Reply { .. } => UnitKind::Reply,
        }
    }

    pub fn author(&self) -> &'a User {
        match self {
            UnitRef::Comment(c) => &c.author,
            UnitRef::Reply { reply, .. } => &reply.author,
        }
    }

    pub fn content(&self) -> &'a str {
        match self {
            UnitRef::Comment(c) => &c.content,
            UnitRef::Reply { reply, .. } => &reply.content,
        }
    }

    pub fn created_at(&self) -> &'a str {
        match self {
            UnitRef::Comment(c) => &c.created_at,
            UnitRef::Reply { reply, .. } => &reply.created_at,
        }
    }

    pub fn score(&self) -> i64 {
        match self {
            UnitRef::Comment(c) => c.score,
            UnitRef::Reply { reply, .. } => reply.score,
        }
    }

    /// The comment that holds this unit's thread (itself for a comment)
    pub fn thread_id(&self) -> CommentId {
        match self {
            UnitRef::Comment(c) => c.id,
            UnitRef::Reply { comment_id, .. } => *comment_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::builder::{CommentBuilder, ReplyBuilder};

    #[test]
    fn test_comment_update() {
        let mut comment = CommentBuilder::new(User::with_conventional_avatar("alice"))
            .id(1)
            .content("Hello")
            .build();
        comment.update_content("Hello again");
        assert_eq!(comment.content, "Hello again");
    }

    #[test]
    fn test_reply_lookup() {
        let comment = CommentBuilder::new(User::with_conventional_avatar("alice"))
            .id(1)
            .reply(
                ReplyBuilder::new(User::with_conventional_avatar("bob"))
                    .id(2)
                    .content("Hi")
                    .build(),
            )
            .build();
        assert!(comment.has_reply(CommentId(2)));
        assert!(!comment.has_reply(CommentId(1)));
        assert_eq!(comment.reply(CommentId(2)).map(|r| r.content.as_str()), Some("Hi"));
    }

    #[test]
    fn test_seed_shaped_json() {
        let json = r#"{
            "id": 2,
            "content": "Woah, your project looks awesome!",
            "createdAt": "2 weeks ago",
            "score": 5,
            "user": {
                "image": { "png": "a.png", "webp": "a.webp" },
                "username": "maxblagun"
            },
            "replies": [{
                "id": 3,
                "content": "Thanks!",
                "createdAt": "1 week ago",
                "score": 4,
                "replyingTo": "maxblagun",
                "user": {
                    "image": { "png": "b.png", "webp": "b.webp" },
                    "username": "ramsesmiron"
                }
            }]
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.created_at, "2 weeks ago");
        assert_eq!(comment.author.username, "maxblagun");
        assert_eq!(comment.replies[0].replying_to.as_deref(), Some("maxblagun"));
        assert_eq!(comment.replies[0].author.avatar.png, "b.png");
    }

    #[test]
    fn test_missing_replies_defaults_to_empty() {
        let json = r#"{
            "id": 9,
            "content": "",
            "createdAt": "today",
            "score": 0,
            "user": { "image": { "png": "", "webp": "" }, "username": "x" }
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert!(comment.replies.is_empty());
    }

    #[test]
    fn test_unit_ref_accessors() {
        let comment = CommentBuilder::new(User::with_conventional_avatar("alice"))
            .id(1)
            .score(3)
            .reply(
                ReplyBuilder::new(User::with_conventional_avatar("bob"))
                    .id(2)
                    .score(-1)
                    .build(),
            )
            .build();

        let unit = UnitRef::Comment(&comment);
        assert_eq!(unit.kind(), UnitKind::Comment);
        assert_eq!(unit.thread_id(), CommentId(1));
        assert_eq!(unit.score(), 3);

        let reply = UnitRef::Reply {
            comment_id: comment.id,
            reply: &comment.replies[0],
        };
        assert_eq!(reply.kind(), UnitKind::Reply);
        assert_eq!(reply.thread_id(), CommentId(1));
        assert_eq!(reply.author().username, "bob");
        assert_eq!(reply.score(), -1);
    }
}

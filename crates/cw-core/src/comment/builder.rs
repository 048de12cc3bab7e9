//! Builders for comments and replies

use super::model::{Comment, Reply};
use crate::types::{CommentId, User, CREATED_JUST_NOW};

/// Score a freshly posted comment starts with
pub const NEW_COMMENT_SCORE: i64 = 1;

/// Score a freshly posted reply starts with
pub const NEW_REPLY_SCORE: i64 = 0;

/// Builder for creating comments with fluent API
///
/// Defaults match a comment posted during the session: score 1,
/// "Just now", no replies.
pub struct CommentBuilder {
    id: CommentId,
    author: User,
    content: String,
    created_at: String,
    score: i64,
    replies: Vec<Reply>,
}

impl CommentBuilder {
    /// Create a new builder for a comment by `author`
    pub fn new(author: User) -> Self {
        Self {
            id: CommentId(0),
            author,
            content: String::new(),
            created_at: CREATED_JUST_NOW.to_string(),
            score: NEW_COMMENT_SCORE,
            replies: Vec::new(),
        }
    }

    /// Set the comment ID
    pub fn id(mut self, id: impl Into<CommentId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the comment content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the created-at label
    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Set the stored score
    pub fn score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Append a reply
    pub fn reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    /// Append multiple replies
    pub fn replies(mut self, replies: impl IntoIterator<Item = Reply>) -> Self {
        self.replies.extend(replies);
        self
    }

    /// Build the comment
    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            content: self.content,
            created_at: self.created_at,
            score: self.score,
            author: self.author,
            replies: self.replies,
        }
    }
}

/// Builder for creating replies with fluent API
pub struct ReplyBuilder {
    id: CommentId,
    author: User,
    content: String,
    created_at: String,
    score: i64,
    replying_to: Option<String>,
}

impl ReplyBuilder {
    /// Create a new builder for a reply by `author`
    pub fn new(author: User) -> Self {
        Self {
            id: CommentId(0),
            author,
            content: String::new(),
            created_at: CREATED_JUST_NOW.to_string(),
            score: NEW_REPLY_SCORE,
            replying_to: None,
        }
    }

    /// Set the reply ID
    pub fn id(mut self, id: impl Into<CommentId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the reply content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the created-at label
    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Set the stored score
    pub fn score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Set the username being answered
    pub fn replying_to(mut self, username: impl Into<String>) -> Self {
        self.replying_to = Some(username.into());
        self
    }

    /// Build the reply
    pub fn build(self) -> Reply {
        Reply {
            id: self.id,
            content: self.content,
            created_at: self.created_at,
            score: self.score,
            replying_to: self.replying_to,
            author: self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_defaults() {
        let comment = CommentBuilder::new(User::with_conventional_avatar("alice")).build();
        assert_eq!(comment.score, 1);
        assert_eq!(comment.created_at, "Just now");
        assert!(comment.replies.is_empty());
        assert_eq!(comment.content, "");
    }

    #[test]
    fn test_reply_defaults() {
        let reply = ReplyBuilder::new(User::with_conventional_avatar("bob")).build();
        assert_eq!(reply.score, 0);
        assert_eq!(reply.created_at, "Just now");
        assert!(reply.replying_to.is_none());
    }

    #[test]
    fn test_builder_with_fields() {
        let comment = CommentBuilder::new(User::with_conventional_avatar("alice"))
            .id(5)
            .content("Impressive!")
            .created_at("1 month ago")
            .score(12)
            .replies(vec![
                ReplyBuilder::new(User::with_conventional_avatar("bob"))
                    .id(6)
                    .replying_to("alice")
                    .build(),
                ReplyBuilder::new(User::with_conventional_avatar("carol"))
                    .id(7)
                    .build(),
            ])
            .build();

        assert_eq!(comment.id, CommentId(5));
        assert_eq!(comment.created_at, "1 month ago");
        assert_eq!(comment.score, 12);
        assert_eq!(comment.replies.len(), 2);
        assert_eq!(comment.replies[0].replying_to.as_deref(), Some("alice"));
    }
}

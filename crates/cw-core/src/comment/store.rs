//! Comment tree store
//!
//! The store exclusively owns the ordered top-level comments, and each comment
//! owns its replies. Every operation keyed by id is a silent no-op when the id
//! is not in the tree; return values report whether anything changed.

use super::builder::{CommentBuilder, ReplyBuilder};
use super::id::IdGenerator;
use super::model::{Comment, Reply, UnitRef};
use super::validator::TreeValidator;
use crate::error::Result;
use crate::types::{ActiveTarget, CommentId, User};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A record taken out of the tree by a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    /// A top-level comment, with its replies
    Comment(Comment),
    /// A reply and the comment it was removed from
    Reply { comment_id: CommentId, reply: Reply },
}

impl Removed {
    /// ID of the removed record
    pub fn id(&self) -> CommentId {
        match self {
            Removed::Comment(c) => c.id,
            Removed::Reply { reply, .. } => reply.id,
        }
    }
}

/// Store for the comment tree and the shared active target
#[derive(Debug, Clone)]
pub struct CommentStore {
    /// Author of everything created through the store
    current_user: User,
    /// Top-level comments in display order
    comments: Vec<Comment>,
    /// The one unit being edited or replied to
    active: Option<ActiveTarget>,
    ids: IdGenerator,
}

impl CommentStore {
    /// Create an empty store
    pub fn new(current_user: User) -> Self {
        Self {
            current_user,
            comments: Vec::new(),
            active: None,
            ids: IdGenerator::new(),
        }
    }

    /// Create a store from an existing tree
    ///
    /// Fails when two records share an id.
    pub fn with_comments(current_user: User, comments: Vec<Comment>) -> Result<Self> {
        TreeValidator::new().validate_ids(&comments)?;

        let max_id = comments
            .iter()
            .flat_map(|c| std::iter::once(c.id).chain(c.replies.iter().map(|r| r.id)))
            .max()
            .unwrap_or(CommentId(0));

        debug!(
            "Loaded comment tree with {} comments, max id {}",
            comments.len(),
            max_id
        );

        Ok(Self {
            current_user,
            comments,
            active: None,
            ids: IdGenerator::starting_after(max_id),
        })
    }

    /// The user every new record is attributed to
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Top-level comments in order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of top-level comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if there are no comments
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Number of comments plus replies
    pub fn unit_count(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }

    /// Get a top-level comment by ID
    pub fn get_comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Find any unit by ID
    pub fn find(&self, id: CommentId) -> Option<UnitRef<'_>> {
        for comment in &self.comments {
            if comment.id == id {
                return Some(UnitRef::Comment(comment));
            }
            if let Some(reply) = comment.reply(id) {
                return Some(UnitRef::Reply {
                    comment_id: comment.id,
                    reply,
                });
            }
        }
        None
    }

    /// Check if any unit has this ID
    pub fn contains(&self, id: CommentId) -> bool {
        self.find(id).is_some()
    }

    /// ID of the comment that owns a reply
    pub fn owner_of(&self, reply_id: CommentId) -> Option<CommentId> {
        self.comments
            .iter()
            .find(|c| c.has_reply(reply_id))
            .map(|c| c.id)
    }

    /// All units in display order: each comment followed by its replies
    pub fn units(&self) -> Vec<UnitRef<'_>> {
        let mut units = Vec::with_capacity(self.unit_count());
        for comment in &self.comments {
            units.push(UnitRef::Comment(comment));
            units.extend(comment.replies.iter().map(|reply| UnitRef::Reply {
                comment_id: comment.id,
                reply,
            }));
        }
        units
    }

    /// Post a new top-level comment at the end of the list
    ///
    /// Content is taken as-is; empty text is accepted.
    pub fn add_comment(&mut self, text: impl Into<String>) -> CommentId {
        let id = self.fresh_id();
        let comment = CommentBuilder::new(self.current_user.clone())
            .id(id)
            .content(text)
            .build();

        self.comments.push(comment);
        debug!("Added comment {}", id);
        id
    }

    /// Delete a comment, or a reply anywhere in the tree
    ///
    /// Comments are scanned in order. For each one the comment itself is
    /// checked before its replies, and the scan stops at the first removal.
    pub fn delete_comment(&mut self, id: CommentId) -> Option<Removed> {
        let mut removed = None;

        for index in 0..self.comments.len() {
            if self.comments[index].id == id {
                removed = Some(Removed::Comment(self.comments.remove(index)));
                break;
            }

            let comment = &mut self.comments[index];
            if let Some(pos) = comment.replies.iter().position(|r| r.id == id) {
                removed = Some(Removed::Reply {
                    comment_id: comment.id,
                    reply: comment.replies.remove(pos),
                });
                break;
            }
        }

        match &removed {
            Some(Removed::Comment(_)) => debug!("Deleted comment {}", id),
            Some(Removed::Reply { comment_id, .. }) => {
                debug!("Deleted reply {} from comment {}", id, comment_id)
            }
            None => trace!("Delete ignored, no unit with id {}", id),
        }

        if removed.is_some() {
            self.drop_dangling_target();
        }
        removed
    }

    /// Replace the content of a top-level comment
    ///
    /// Clears the active target whether or not the comment exists.
    pub fn update_comment(&mut self, id: CommentId, text: impl Into<String>) -> bool {
        self.active = None;

        match self.comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.update_content(text);
                debug!("Updated comment {}", id);
                true
            }
            None => {
                trace!("Update ignored, no comment with id {}", id);
                false
            }
        }
    }

    /// Add a reply at the front of a comment's replies
    ///
    /// Clears the active target when the reply is added.
    pub fn add_reply(
        &mut self,
        comment_id: CommentId,
        text: impl Into<String>,
        replying_to: Option<String>,
    ) -> Option<CommentId> {
        let Some(index) = self.comments.iter().position(|c| c.id == comment_id) else {
            trace!("Reply ignored, no comment with id {}", comment_id);
            return None;
        };

        let id = self.fresh_id();
        let mut builder = ReplyBuilder::new(self.current_user.clone())
            .id(id)
            .content(text);
        if let Some(username) = replying_to {
            builder = builder.replying_to(username);
        }
        let reply = builder.build();

        self.comments[index].replies.insert(0, reply);
        self.active = None;

        debug!("Added reply {} to comment {}", id, comment_id);
        Some(id)
    }

    /// Replace the content of a reply in place
    ///
    /// Clears the active target whether or not the reply exists.
    pub fn update_reply(
        &mut self,
        comment_id: CommentId,
        reply_id: CommentId,
        text: impl Into<String>,
    ) -> bool {
        self.active = None;

        let reply = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .and_then(|c| c.replies.iter_mut().find(|r| r.id == reply_id));

        match reply {
            Some(reply) => {
                reply.update_content(text);
                debug!("Updated reply {} in comment {}", reply_id, comment_id);
                true
            }
            None => {
                trace!(
                    "Update ignored, no reply {} in comment {}",
                    reply_id,
                    comment_id
                );
                false
            }
        }
    }

    /// Remove a reply from a comment
    pub fn delete_reply(&mut self, comment_id: CommentId, reply_id: CommentId) -> Option<Reply> {
        let comment = self.comments.iter_mut().find(|c| c.id == comment_id)?;
        let pos = comment.replies.iter().position(|r| r.id == reply_id)?;
        let reply = comment.replies.remove(pos);

        debug!("Deleted reply {} from comment {}", reply_id, comment_id);
        self.drop_dangling_target();
        Some(reply)
    }

    /// The unit currently being edited or replied to
    pub fn active_target(&self) -> Option<ActiveTarget> {
        self.active
    }

    /// Select a unit for editing or replying
    ///
    /// Replaces any previous target. Ignored when the id is not in the tree.
    pub fn set_active_target(&mut self, target: ActiveTarget) -> bool {
        if !self.contains(target.id) {
            trace!("Active target ignored, no unit with id {}", target.id);
            return false;
        }
        debug!("Active target: {} {}", target.mode, target.id);
        self.active = Some(target);
        true
    }

    /// Return every unit to idle
    pub fn clear_active_target(&mut self) {
        self.active = None;
    }

    fn drop_dangling_target(&mut self) {
        if let Some(target) = self.active {
            if !self.contains(target.id) {
                debug!("Cleared active target {} after delete", target.id);
                self.active = None;
            }
        }
    }

    fn fresh_id(&mut self) -> CommentId {
        while let Some(id) = self.ids.next_id() {
            if !self.contains(id) {
                return id;
            }
        }

        // Clock ids are used up; reuse the lowest free id
        let used: HashSet<CommentId> = self.units().iter().map(|unit| unit.id()).collect();
        let mut id = 1;
        while used.contains(&CommentId(id)) {
            id += 1;
        }
        debug!("Id space exhausted, reusing {}", id);
        CommentId(id)
    }
}

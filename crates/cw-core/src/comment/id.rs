//! Creation-time id generation

use crate::types::CommentId;
use chrono::Utc;

/// Issues ids from the wall clock in milliseconds
///
/// Ids are strictly increasing: when the clock has not moved past the last
/// issued id, the next id is `last + 1`. Once `u64::MAX` has been issued the
/// generator is exhausted.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that never issues `id` or anything below it
    pub fn starting_after(id: CommentId) -> Self {
        Self { last: id.0 }
    }

    /// Issue the next id using the current time
    pub fn next_id(&mut self) -> Option<CommentId> {
        self.next_at(now_millis())
    }

    /// Issue the next id as if the clock read `now_millis`
    pub fn next_at(&mut self, now_millis: u64) -> Option<CommentId> {
        let id = now_millis.max(self.last.checked_add(1)?);
        self.last = id;
        Some(CommentId(id))
    }

    /// The most recently issued id
    pub fn last(&self) -> CommentId {
        CommentId(self.last)
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

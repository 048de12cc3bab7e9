//! State owned by one comment or reply as presented in the widget

use crate::types::{ActiveTarget, CommentId, TargetMode, User};
use crate::vote::{VoteCounter, VoteDirection};

/// Mode of a unit, derived from the shared active target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    #[default]
    Idle,
    Editing,
    Replying,
}

impl UnitMode {
    /// Mode of unit `id` given the tree's active target
    pub fn of(active: Option<ActiveTarget>, id: CommentId) -> Self {
        match active {
            Some(target) if target.id == id => match target.mode {
                TargetMode::Editing => UnitMode::Editing,
                TargetMode::Replying => UnitMode::Replying,
            },
            _ => UnitMode::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UnitMode::Idle)
    }
}

/// Actions offered on a unit
///
/// Units written by the current user can be edited and deleted; everyone
/// else's can only be replied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitActions {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_reply: bool,
    /// Show the "you" tag next to the author
    pub is_own: bool,
}

impl UnitActions {
    pub fn for_author(author: &User, current_user: &User) -> Self {
        let is_own = author.is(current_user);
        Self {
            can_edit: is_own,
            can_delete: is_own,
            can_reply: !is_own,
            is_own,
        }
    }
}

/// Local state of one unit: its display score and delete prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitState {
    votes: VoteCounter,
    confirming_delete: bool,
}

impl UnitState {
    /// Fresh state for a record with `stored_score`
    pub fn new(stored_score: i64) -> Self {
        Self {
            votes: VoteCounter::new(stored_score),
            confirming_delete: false,
        }
    }

    pub fn display_score(&self) -> i64 {
        self.votes.score()
    }

    /// Direction of the last accepted vote click
    pub fn last_vote(&self) -> Option<VoteDirection> {
        self.votes.last_vote()
    }

    pub fn vote(&mut self, direction: VoteDirection) -> bool {
        self.votes.vote(direction)
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Open the delete prompt
    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    /// Dismiss the delete prompt without deleting
    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Dismiss the prompt and report whether a delete should happen
    pub fn confirm_delete(&mut self) -> bool {
        let confirmed = self.confirming_delete;
        self.confirming_delete = false;
        confirmed
    }
}

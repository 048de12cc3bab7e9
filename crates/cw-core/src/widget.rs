//! Comment widget controller
//!
//! Ties the store, the per-unit state and the composers together. Every user
//! event enters through [`CommentWidget`], so a front end only has to map its
//! input to these calls and render the result.

use crate::comment::{CommentStore, Removed, UnitKind};
use crate::composer::Composer;
use crate::types::{ActiveTarget, CommentId, TargetMode, User};
use crate::unit::{UnitActions, UnitMode, UnitState};
use crate::vote::VoteDirection;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Which composer an input or submit goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerSlot {
    /// The always-present composer for new top-level comments
    NewComment,
    /// The composer of the unit being edited or replied to
    Active,
}

/// What a submit produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// A new top-level comment
    Comment(CommentId),
    /// A new reply, with the comment it was added to
    Reply {
        comment_id: CommentId,
        reply_id: CommentId,
    },
    /// Content of an existing unit was replaced
    Edited(CommentId),
}

/// The nested comment widget
#[derive(Debug, Clone)]
pub struct CommentWidget {
    store: CommentStore,
    /// Created on first use from the record's stored score
    units: HashMap<CommentId, UnitState>,
    new_comment: Composer,
    /// Present exactly while the store has an active target
    active_composer: Option<Composer>,
}

impl CommentWidget {
    /// Create a widget over an existing store
    pub fn new(store: CommentStore) -> Self {
        Self {
            store,
            units: HashMap::new(),
            new_comment: Composer::new_comment(),
            active_composer: None,
        }
    }

    pub fn store(&self) -> &CommentStore {
        &self.store
    }

    pub fn current_user(&self) -> &User {
        self.store.current_user()
    }

    pub fn active_target(&self) -> Option<ActiveTarget> {
        self.store.active_target()
    }

    /// Score shown for a unit
    pub fn display_score(&self, id: CommentId) -> Option<i64> {
        match self.units.get(&id) {
            Some(state) => Some(state.display_score()),
            None => self.store.find(id).map(|unit| unit.score()),
        }
    }

    /// Direction of the last accepted vote on a unit, if any
    pub fn last_vote(&self, id: CommentId) -> Option<VoteDirection> {
        self.units.get(&id).and_then(|state| state.last_vote())
    }

    pub fn mode_of(&self, id: CommentId) -> UnitMode {
        UnitMode::of(self.store.active_target(), id)
    }

    pub fn is_confirming_delete(&self, id: CommentId) -> bool {
        self.units
            .get(&id)
            .map(|s| s.is_confirming_delete())
            .unwrap_or(false)
    }

    /// Actions offered on a unit
    pub fn actions_for(&self, id: CommentId) -> Option<UnitActions> {
        self.store
            .find(id)
            .map(|unit| UnitActions::for_author(unit.author(), self.store.current_user()))
    }

    /// Upvote click
    pub fn increase(&mut self, id: CommentId) -> bool {
        self.vote(id, VoteDirection::Increase)
    }

    /// Downvote click
    pub fn decrease(&mut self, id: CommentId) -> bool {
        self.vote(id, VoteDirection::Decrease)
    }

    fn vote(&mut self, id: CommentId, direction: VoteDirection) -> bool {
        let accepted = match self.unit_mut(id) {
            Some(state) => state.vote(direction),
            None => false,
        };
        if !accepted {
            trace!("Ignored {} on {}", direction, id);
        }
        accepted
    }

    /// "Reply" click; only offered on other people's units
    pub fn click_reply(&mut self, id: CommentId) -> bool {
        let composer = match self.store.find(id) {
            Some(unit) if !unit.author().is(self.store.current_user()) => {
                Composer::reply_to(unit.author())
            }
            _ => return false,
        };

        if !self.store.set_active_target(ActiveTarget::replying(id)) {
            return false;
        }
        self.active_composer = Some(composer);
        true
    }

    /// "Edit" click; only offered on the current user's units
    pub fn click_edit(&mut self, id: CommentId) -> bool {
        let composer = match self.store.find(id) {
            Some(unit) if unit.author().is(self.store.current_user()) => {
                Composer::edit(unit.content())
            }
            _ => return false,
        };

        if !self.store.set_active_target(ActiveTarget::editing(id)) {
            return false;
        }
        self.active_composer = Some(composer);
        true
    }

    /// Return the active unit to idle without submitting
    pub fn cancel_compose(&mut self) {
        self.store.clear_active_target();
        self.active_composer = None;
    }

    /// "Delete" click; opens the confirmation prompt
    pub fn request_delete(&mut self, id: CommentId) -> bool {
        if !self.actions_for(id).map(|a| a.can_delete).unwrap_or(false) {
            return false;
        }
        match self.unit_mut(id) {
            Some(state) => {
                state.request_delete();
                true
            }
            None => false,
        }
    }

    /// "No, cancel" in the confirmation prompt
    pub fn cancel_delete(&mut self, id: CommentId) {
        if let Some(state) = self.units.get_mut(&id) {
            state.cancel_delete();
        }
    }

    /// "Yes, delete" in the confirmation prompt
    ///
    /// Comments are removed through the tree-level delete; replies through
    /// their owning comment's reply list.
    pub fn confirm_delete(&mut self, id: CommentId) -> Option<Removed> {
        let confirmed = self
            .units
            .get_mut(&id)
            .map(|s| s.confirm_delete())
            .unwrap_or(false);
        if !confirmed {
            return None;
        }

        let (kind, thread_id) = {
            let unit = self.store.find(id)?;
            (unit.kind(), unit.thread_id())
        };

        let removed = match kind {
            UnitKind::Comment => self.store.delete_comment(id),
            UnitKind::Reply => self
                .store
                .delete_reply(thread_id, id)
                .map(|reply| Removed::Reply {
                    comment_id: thread_id,
                    reply,
                }),
        };

        if let Some(removed) = &removed {
            self.forget(removed);
        }
        self.sync_composer();
        removed
    }

    /// Composer behind a slot; `Active` is absent while every unit is idle
    pub fn composer(&self, slot: ComposerSlot) -> Option<&Composer> {
        match slot {
            ComposerSlot::NewComment => Some(&self.new_comment),
            ComposerSlot::Active => self.active_composer.as_ref(),
        }
    }

    pub fn composer_mut(&mut self, slot: ComposerSlot) -> Option<&mut Composer> {
        match slot {
            ComposerSlot::NewComment => Some(&mut self.new_comment),
            ComposerSlot::Active => self.active_composer.as_mut(),
        }
    }

    /// Submit a composer
    ///
    /// A reply is prefixed with `@<username>, ` of the unit replied to and
    /// lands at the front of the thread's replies. Replying to a reply adds to
    /// the same thread.
    pub fn submit(&mut self, slot: ComposerSlot) -> Option<Submitted> {
        match slot {
            ComposerSlot::NewComment => {
                let text = self.new_comment.submit();
                Some(Submitted::Comment(self.store.add_comment(text)))
            }
            ComposerSlot::Active => {
                let target = self.store.active_target()?;
                let text = self.active_composer.take()?.submit();
                let submitted = self.submit_for(target, text);
                self.sync_composer();
                submitted
            }
        }
    }

    fn submit_for(&mut self, target: ActiveTarget, text: String) -> Option<Submitted> {
        let (kind, thread_id, target_author) = {
            let unit = self.store.find(target.id)?;
            (unit.kind(), unit.thread_id(), unit.author().username.clone())
        };

        match (target.mode, kind) {
            (TargetMode::Replying, _) => {
                let thread_author = self
                    .store
                    .get_comment(thread_id)
                    .map(|c| c.author.username.clone());
                let content = format!("@{}, {}", target_author, text);
                let reply_id = self.store.add_reply(thread_id, content, thread_author)?;
                debug!("Reply {} added under {}", reply_id, thread_id);
                Some(Submitted::Reply {
                    comment_id: thread_id,
                    reply_id,
                })
            }
            (TargetMode::Editing, UnitKind::Comment) => self
                .store
                .update_comment(target.id, text)
                .then_some(Submitted::Edited(target.id)),
            (TargetMode::Editing, UnitKind::Reply) => self
                .store
                .update_reply(thread_id, target.id, text)
                .then_some(Submitted::Edited(target.id)),
        }
    }

    fn unit_mut(&mut self, id: CommentId) -> Option<&mut UnitState> {
        let score = self.store.find(id)?.score();
        Some(self.units.entry(id).or_insert_with(|| UnitState::new(score)))
    }

    fn forget(&mut self, removed: &Removed) {
        match removed {
            Removed::Comment(comment) => {
                self.units.remove(&comment.id);
                for reply in &comment.replies {
                    self.units.remove(&reply.id);
                }
            }
            Removed::Reply { reply, .. } => {
                self.units.remove(&reply.id);
            }
        }
    }

    fn sync_composer(&mut self) {
        if self.store.active_target().is_none() {
            self.active_composer = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::{CommentBuilder, ReplyBuilder};
    use pretty_assertions::assert_eq;

    fn user(name: &str) -> User {
        User::with_conventional_avatar(name)
    }

    /// One comment (id 1, "Hello", score 3, alice); current user bob
    fn hello_widget() -> CommentWidget {
        let comments = vec![CommentBuilder::new(user("alice"))
            .id(1)
            .content("Hello")
            .created_at("1 month ago")
            .score(3)
            .build()];
        CommentWidget::new(CommentStore::with_comments(user("bob"), comments).unwrap())
    }

    /// alice's comment 1 with replies 10 (bob) and 11 (carol)
    fn thread_widget() -> CommentWidget {
        let comments = vec![CommentBuilder::new(user("alice"))
            .id(1)
            .content("Hello")
            .score(3)
            .replies(vec![
                ReplyBuilder::new(user("bob"))
                    .id(10)
                    .content("mine")
                    .score(2)
                    .replying_to("alice")
                    .build(),
                ReplyBuilder::new(user("carol"))
                    .id(11)
                    .content("theirs")
                    .score(1)
                    .replying_to("alice")
                    .build(),
            ])
            .build()];
        CommentWidget::new(CommentStore::with_comments(user("bob"), comments).unwrap())
    }

    #[test]
    fn test_reply_scenario() {
        let mut widget = hello_widget();

        assert!(widget.click_reply(CommentId(1)));
        widget
            .composer_mut(ComposerSlot::Active)
            .unwrap()
            .insert_str("Hi");
        let submitted = widget.submit(ComposerSlot::Active);

        let comment = &widget.store().comments()[0];
        assert_eq!(comment.replies.len(), 1);
        let reply = &comment.replies[0];
        assert_eq!(reply.content, "@alice, Hi");
        assert_eq!(reply.author.username, "bob");
        assert_eq!(reply.score, 0);
        assert_eq!(
            submitted,
            Some(Submitted::Reply {
                comment_id: CommentId(1),
                reply_id: reply.id
            })
        );
        assert_eq!(widget.active_target(), None);
        assert!(widget.composer(ComposerSlot::Active).is_none());
    }

    #[test]
    fn test_vote_scenario() {
        let mut widget = hello_widget();
        assert!(widget.increase(CommentId(1)));
        assert_eq!(widget.display_score(CommentId(1)), Some(4));
        assert!(!widget.increase(CommentId(1)));
        assert_eq!(widget.display_score(CommentId(1)), Some(4));
        assert_eq!(widget.store().comments()[0].score, 3);
    }

    #[test]
    fn test_last_vote_is_remembered() {
        let mut widget = hello_widget();
        assert_eq!(widget.last_vote(CommentId(1)), None);

        widget.increase(CommentId(1));
        assert_eq!(widget.last_vote(CommentId(1)), Some(VoteDirection::Increase));
        widget.decrease(CommentId(1));
        assert_eq!(widget.last_vote(CommentId(1)), Some(VoteDirection::Decrease));
        // Back at the stored score, but the click is still remembered
        assert_eq!(widget.display_score(CommentId(1)), Some(3));

        // Ignored clicks do not change it
        widget.decrease(CommentId(1));
        widget.decrease(CommentId(1));
        assert_eq!(widget.last_vote(CommentId(1)), Some(VoteDirection::Decrease));
    }

    #[test]
    fn test_vote_on_extreme_scores() {
        let comments = vec![
            CommentBuilder::new(user("alice")).id(1).score(i64::MAX).build(),
            CommentBuilder::new(user("alice")).id(2).score(i64::MIN).build(),
        ];
        let mut widget =
            CommentWidget::new(CommentStore::with_comments(user("bob"), comments).unwrap());

        assert!(!widget.increase(CommentId(1)));
        assert_eq!(widget.display_score(CommentId(1)), Some(i64::MAX));
        assert!(!widget.decrease(CommentId(2)));
        assert_eq!(widget.display_score(CommentId(2)), Some(i64::MIN));
        assert!(widget.increase(CommentId(2)));
        assert_eq!(widget.display_score(CommentId(2)), Some(i64::MIN + 1));
    }

    #[test]
    fn test_votes_are_per_unit() {
        let mut widget = thread_widget();
        widget.decrease(CommentId(10));
        widget.increase(CommentId(11));
        assert_eq!(widget.display_score(CommentId(1)), Some(3));
        assert_eq!(widget.display_score(CommentId(10)), Some(1));
        assert_eq!(widget.display_score(CommentId(11)), Some(2));
        assert_eq!(widget.display_score(CommentId(99)), None);
        assert!(!widget.increase(CommentId(99)));
    }

    #[test]
    fn test_reply_only_on_others_units() {
        let mut widget = thread_widget();
        assert!(!widget.click_reply(CommentId(10)));
        assert_eq!(widget.active_target(), None);
        assert!(widget.click_reply(CommentId(11)));
        assert_eq!(widget.mode_of(CommentId(11)), UnitMode::Replying);
    }

    #[test]
    fn test_edit_only_on_own_units() {
        let mut widget = thread_widget();
        assert!(!widget.click_edit(CommentId(1)));
        assert!(widget.click_edit(CommentId(10)));
        assert_eq!(
            widget.composer(ComposerSlot::Active).map(|c| c.text()),
            Some("mine")
        );
        assert_eq!(widget.mode_of(CommentId(10)), UnitMode::Editing);
    }

    #[test]
    fn test_only_one_unit_active() {
        let mut widget = thread_widget();
        widget.click_reply(CommentId(1));
        widget.click_edit(CommentId(10));
        assert_eq!(widget.mode_of(CommentId(1)), UnitMode::Idle);
        assert_eq!(widget.mode_of(CommentId(10)), UnitMode::Editing);
        assert_eq!(
            widget.active_target().map(|t| t.mode),
            Some(TargetMode::Editing)
        );
    }

    #[test]
    fn test_reply_to_reply_joins_thread() {
        let mut widget = thread_widget();
        widget.click_reply(CommentId(11));
        widget
            .composer_mut(ComposerSlot::Active)
            .unwrap()
            .insert_str("agreed");
        widget.submit(ComposerSlot::Active);

        let replies = &widget.store().comments()[0].replies;
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0].content, "@carol, agreed");
        assert_eq!(replies[0].replying_to.as_deref(), Some("alice"));
        assert_eq!(replies[1].id, CommentId(10));
        assert_eq!(replies[2].id, CommentId(11));
    }

    #[test]
    fn test_edit_reply_submit() {
        let mut widget = thread_widget();
        widget.click_edit(CommentId(10));
        let composer = widget.composer_mut(ComposerSlot::Active).unwrap();
        composer.set_text("rewritten");

        assert_eq!(
            widget.submit(ComposerSlot::Active),
            Some(Submitted::Edited(CommentId(10)))
        );
        assert_eq!(widget.store().comments()[0].replies[0].content, "rewritten");
        assert_eq!(widget.active_target(), None);
    }

    #[test]
    fn test_edit_comment_submit() {
        let mut widget = hello_widget();
        let id = widget.submit(ComposerSlot::NewComment);
        let Some(Submitted::Comment(id)) = id else {
            panic!("expected a new comment");
        };

        widget.click_edit(id);
        widget.composer_mut(ComposerSlot::Active).unwrap().set_text("");
        widget.submit(ComposerSlot::Active);

        assert_eq!(widget.store().get_comment(id).unwrap().content, "");
        assert_eq!(widget.active_target(), None);
    }

    #[test]
    fn test_new_comment_submit() {
        let mut widget = hello_widget();
        widget
            .composer_mut(ComposerSlot::NewComment)
            .unwrap()
            .insert_str("Second");
        let submitted = widget.submit(ComposerSlot::NewComment);

        let last = widget.store().comments().last().unwrap();
        assert_eq!(submitted, Some(Submitted::Comment(last.id)));
        assert_eq!(last.content, "Second");
        assert_eq!(last.score, 1);
        assert!(widget.composer(ComposerSlot::NewComment).unwrap().is_empty());
    }

    #[test]
    fn test_submit_active_without_target() {
        let mut widget = hello_widget();
        assert_eq!(widget.submit(ComposerSlot::Active), None);
    }

    #[test]
    fn test_cancel_compose() {
        let mut widget = hello_widget();
        widget.click_reply(CommentId(1));
        widget.cancel_compose();
        assert_eq!(widget.mode_of(CommentId(1)), UnitMode::Idle);
        assert!(widget.composer(ComposerSlot::Active).is_none());
    }

    #[test]
    fn test_delete_flow_for_reply() {
        let mut widget = thread_widget();

        assert!(!widget.request_delete(CommentId(11)));
        assert!(widget.request_delete(CommentId(10)));
        assert!(widget.is_confirming_delete(CommentId(10)));

        widget.cancel_delete(CommentId(10));
        assert!(!widget.is_confirming_delete(CommentId(10)));
        assert!(widget.confirm_delete(CommentId(10)).is_none());
        assert_eq!(widget.store().unit_count(), 3);

        widget.request_delete(CommentId(10));
        let removed = widget.confirm_delete(CommentId(10));
        assert_eq!(removed.map(|r| r.id()), Some(CommentId(10)));
        assert_eq!(widget.store().unit_count(), 2);
        assert!(!widget.is_confirming_delete(CommentId(10)));
    }

    #[test]
    fn test_deleting_active_unit_closes_composer() {
        let mut widget = thread_widget();
        widget.click_edit(CommentId(10));
        widget.request_delete(CommentId(10));
        widget.confirm_delete(CommentId(10));
        assert_eq!(widget.active_target(), None);
        assert!(widget.composer(ComposerSlot::Active).is_none());
    }

    #[test]
    fn test_recreated_unit_starts_from_stored_score() {
        let mut widget = hello_widget();
        widget.submit(ComposerSlot::NewComment);
        let id = widget.store().comments()[1].id;

        widget.increase(id);
        assert_eq!(widget.display_score(id), Some(2));

        widget.request_delete(id);
        widget.confirm_delete(id);
        assert_eq!(widget.display_score(id), None);
    }
}

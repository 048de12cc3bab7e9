//! Application state and key handling
//!
//! Everything here is independent of the terminal, so key sequences can be
//! replayed in tests.

use cw_core::types::CommentId;
use cw_core::widget::Submitted;
use cw_core::{CommentWidget, ComposerSlot};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// What keyboard input currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Moving between units and clicking their buttons
    #[default]
    Browse,
    /// Typing into a composer
    Compose(ComposerSlot),
    /// Delete prompt for a unit is open
    ConfirmDelete(CommentId),
    /// Help overlay
    Help,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The comment widget being driven
    pub widget: CommentWidget,
    /// Current focus
    pub focus: Focus,
    /// Index of the selected unit in display order
    pub selected: usize,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new app state
    pub fn new(widget: CommentWidget) -> Self {
        Self {
            widget,
            focus: Focus::default(),
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// ID of the selected unit
    pub fn selected_id(&self) -> Option<CommentId> {
        self.widget
            .store()
            .units()
            .get(self.selected)
            .map(|unit| unit.id())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Browse => self.handle_browse_input(key),
            Focus::Compose(slot) => self.handle_compose_input(slot, key),
            Focus::ConfirmDelete(id) => self.handle_confirm_input(id, key),
            Focus::Help => self.focus = Focus::Browse,
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) {
        self.clear_message();

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.focus = Focus::Help,

            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => self.goto_bottom(),

            KeyCode::Char('+') | KeyCode::Char('=') => self.vote(true),
            KeyCode::Char('-') => self.vote(false),

            KeyCode::Char('r') => self.start_reply(),
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('d') | KeyCode::Char('x') => self.start_delete(),
            KeyCode::Char('c') => self.focus = Focus::Compose(ComposerSlot::NewComment),

            // Back into a composer left open with Tab
            KeyCode::Enter if self.widget.active_target().is_some() => {
                self.focus = Focus::Compose(ComposerSlot::Active)
            }

            _ => {}
        }
    }

    fn handle_compose_input(&mut self, slot: ComposerSlot, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if slot == ComposerSlot::Active {
                    self.widget.cancel_compose();
                }
                self.focus = Focus::Browse;
                return;
            }
            KeyCode::Tab => {
                self.focus = Focus::Browse;
                return;
            }
            KeyCode::Enter => {
                self.submit(slot);
                return;
            }
            _ => {}
        }

        let Some(composer) = self.widget.composer_mut(slot) else {
            self.focus = Focus::Browse;
            return;
        };

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                composer.insert(c)
            }
            KeyCode::Backspace => composer.backspace(),
            KeyCode::Delete => composer.delete(),
            KeyCode::Left => composer.move_left(),
            KeyCode::Right => composer.move_right(),
            KeyCode::Home => composer.move_home(),
            KeyCode::End => composer.move_end(),
            _ => {}
        }
    }

    fn handle_confirm_input(&mut self, id: CommentId, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if self.widget.confirm_delete(id).is_some() {
                    self.set_message("Comment deleted");
                }
                self.focus = Focus::Browse;
                self.clamp_selection();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.widget.cancel_delete(id);
                self.focus = Focus::Browse;
            }
            _ => {}
        }
    }

    fn submit(&mut self, slot: ComposerSlot) {
        self.focus = Focus::Browse;

        let Some(submitted) = self.widget.submit(slot) else {
            return;
        };
        debug!("Submitted {:?}", submitted);

        let (id, message) = match submitted {
            Submitted::Comment(id) => (id, "Comment added"),
            Submitted::Reply { reply_id, .. } => (reply_id, "Reply added"),
            Submitted::Edited(id) => (id, "Comment updated"),
        };
        self.select(id);
        self.set_message(message);
    }

    fn vote(&mut self, up: bool) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let accepted = if up {
            self.widget.increase(id)
        } else {
            self.widget.decrease(id)
        };
        if !accepted {
            self.set_message("Already voted that way");
        }
    }

    fn start_reply(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.widget.click_reply(id) {
            self.focus = Focus::Compose(ComposerSlot::Active);
        } else {
            self.set_message("You can't reply to your own comment");
        }
    }

    fn start_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.widget.click_edit(id) {
            self.focus = Focus::Compose(ComposerSlot::Active);
        } else {
            self.set_message("You can only edit your own comments");
        }
    }

    fn start_delete(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.widget.request_delete(id) {
            self.focus = Focus::ConfirmDelete(id);
        } else {
            self.set_message("You can only delete your own comments");
        }
    }

    fn unit_count(&self) -> usize {
        self.widget.store().unit_count()
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.unit_count() {
            self.selected += 1;
        }
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn goto_bottom(&mut self) {
        self.selected = self.unit_count().saturating_sub(1);
    }

    fn select(&mut self, id: CommentId) {
        if let Some(index) = self
            .widget
            .store()
            .units()
            .iter()
            .position(|unit| unit.id() == id)
        {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let max = self.unit_count().saturating_sub(1);
        self.selected = self.selected.min(max);
    }
}

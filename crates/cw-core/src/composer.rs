//! Composer: the text box behind new comments, replies and edits
//!
//! The composer does not validate its text. Submitting hands back whatever is
//! in the buffer, blank or not, and leaves the buffer empty.

use crate::types::User;

/// Placeholder shown by the new comment composer
pub const NEW_COMMENT_PLACEHOLDER: &str = "Add comment...";

/// What a composer is writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerKind {
    /// A new top-level comment
    NewComment,
    /// A reply to `to`
    Reply { to: String },
    /// Rewriting existing content
    Edit,
}

impl ComposerKind {
    /// Placeholder shown while the buffer is empty
    pub fn placeholder(&self) -> Option<String> {
        match self {
            ComposerKind::NewComment => Some(NEW_COMMENT_PLACEHOLDER.to_string()),
            ComposerKind::Reply { to } => Some(format!("Replying to @{}", to)),
            ComposerKind::Edit => None,
        }
    }

    /// Label of the submit button
    pub fn button_label(&self) -> &'static str {
        match self {
            ComposerKind::NewComment => "send",
            ComposerKind::Reply { .. } => "reply",
            ComposerKind::Edit => "update",
        }
    }

    /// Edit composers sit in place of the content and show no avatar
    pub fn shows_avatar(&self) -> bool {
        !matches!(self, ComposerKind::Edit)
    }
}

/// Text buffer with a character cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    kind: ComposerKind,
    buffer: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl Composer {
    /// Create an empty composer
    pub fn new(kind: ComposerKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Composer for a new top-level comment
    pub fn new_comment() -> Self {
        Self::new(ComposerKind::NewComment)
    }

    /// Composer for a reply to `user`
    pub fn reply_to(user: &User) -> Self {
        Self::new(ComposerKind::Reply {
            to: user.username.clone(),
        })
    }

    /// Composer seeded with existing content
    pub fn edit(initial: impl Into<String>) -> Self {
        let buffer = initial.into();
        let cursor = buffer.chars().count();
        Self {
            kind: ComposerKind::Edit,
            buffer,
            cursor,
        }
    }

    pub fn kind(&self) -> &ComposerKind {
        &self.kind
    }

    /// Current buffer content
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole buffer and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.remove(byte_pos);
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let byte_pos = self.byte_pos(self.cursor);
            self.buffer.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Take the buffer and clear it
    pub fn submit(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

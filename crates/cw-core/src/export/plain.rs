//! Plain text exporter

use super::exporter::TreeExporter;
use crate::comment::{CommentStore, UnitRef};
use crate::error::Result;

/// Renders the tree as an indented listing
pub struct PlainExporter {
    indent: usize,
}

impl PlainExporter {
    pub fn new() -> Self {
        Self { indent: 4 }
    }

    /// Set reply indentation in spaces
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn render_unit(&self, out: &mut String, unit: &UnitRef<'_>, store: &CommentStore, depth: usize) {
        let pad = " ".repeat(self.indent * depth);
        let you = if unit.author().is(store.current_user()) {
            " (you)"
        } else {
            ""
        };

        out.push_str(&format!(
            "{}[{:+}] {}{} · {} · #{}\n",
            pad,
            unit.score(),
            unit.author().username,
            you,
            unit.created_at(),
            unit.id()
        ));
        for line in unit.content().lines() {
            out.push_str(&format!("{}  {}\n", pad, line));
        }
    }
}

impl Default for PlainExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeExporter for PlainExporter {
    fn export(&self, store: &CommentStore) -> Result<String> {
        let mut out = String::new();

        if store.is_empty() {
            out.push_str("No comments yet.\n");
            return Ok(out);
        }

        for (i, comment) in store.comments().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_unit(&mut out, &UnitRef::Comment(comment), store, 0);
            for reply in &comment.replies {
                let unit = UnitRef::Reply {
                    comment_id: comment.id,
                    reply,
                };
                self.render_unit(&mut out, &unit, store, 1);
            }
        }

        Ok(out)
    }

    fn format_name(&self) -> &str {
        "plain"
    }
}

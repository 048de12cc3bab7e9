//! Exporter trait and format selection

use super::json::JsonExporter;
use super::plain::PlainExporter;
use crate::comment::CommentStore;
use crate::error::{CwError, Result};
use std::fmt;
use std::str::FromStr;

/// Trait for comment tree exporters
pub trait TreeExporter {
    /// Export the tree to a string
    fn export(&self, store: &CommentStore) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;
}

/// Formats the tree can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Plain,
    Json,
}

/// Layout settings shared by the exporters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Reply indentation in spaces (plain)
    pub indent: usize,
    /// Single-line output (JSON)
    pub compact: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            compact: false,
        }
    }
}

impl ExportFormat {
    /// Exporter for this format
    pub fn exporter(&self, options: &ExportOptions) -> Box<dyn TreeExporter> {
        match self {
            ExportFormat::Plain => Box::new(PlainExporter::new().with_indent(options.indent)),
            ExportFormat::Json if options.compact => Box::new(JsonExporter::compact()),
            ExportFormat::Json => Box::new(JsonExporter::new()),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CwError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(ExportFormat::Plain),
            "json" => Ok(ExportFormat::Json),
            other => Err(CwError::Config(format!("Unknown export format: {}", other))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Plain => write!(f, "plain"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("plain".parse::<ExportFormat>().unwrap(), ExportFormat::Plain);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_names() {
        let options = ExportOptions::default();
        assert_eq!(ExportFormat::Plain.exporter(&options).format_name(), "plain");
        assert_eq!(ExportFormat::Json.exporter(&options).format_name(), "json");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_options_shape_output() {
        use crate::comment::{CommentBuilder, CommentStore, ReplyBuilder};
        use crate::types::User;

        let comments = vec![CommentBuilder::new(User::with_conventional_avatar("alice"))
            .id(1)
            .content("Hello")
            .reply(
                ReplyBuilder::new(User::with_conventional_avatar("bob"))
                    .id(2)
                    .content("Hi")
                    .build(),
            )
            .build()];
        let store =
            CommentStore::with_comments(User::with_conventional_avatar("bob"), comments).unwrap();

        let options = ExportOptions {
            indent: 2,
            compact: true,
        };
        let plain = ExportFormat::Plain.exporter(&options).export(&store).unwrap();
        assert!(plain.contains("\n  [+0] bob (you)"));

        let json = ExportFormat::Json.exporter(&options).export(&store).unwrap();
        assert_eq!(json.lines().count(), 1);

        let pretty = ExportFormat::Json
            .exporter(&ExportOptions::default())
            .export(&store)
            .unwrap();
        assert!(pretty.lines().count() > 1);
    }
}

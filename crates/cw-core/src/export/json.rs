//! JSON exporter

use super::exporter::TreeExporter;
use crate::comment::CommentStore;
use crate::error::Result;
use crate::seed::SeedData;

/// Exports the tree in the seed file shape
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Pretty-printed JSON
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line JSON
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeExporter for JsonExporter {
    fn export(&self, store: &CommentStore) -> Result<String> {
        let seed = SeedData {
            current_user: Some(store.current_user().clone()),
            comments: store.comments().to_vec(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&seed)?
        } else {
            serde_json::to_string(&seed)?
        };
        Ok(json)
    }

    fn format_name(&self) -> &str {
        "json"
    }
}

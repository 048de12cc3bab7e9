//! Text export of the comment tree
//!
//! - Plain format: an indented, human-readable thread listing
//! - JSON format: seed-shaped, so an export can be loaded back as a seed

mod exporter;
mod json;
mod plain;

pub use exporter::{ExportFormat, ExportOptions, TreeExporter};
pub use json::JsonExporter;
pub use plain::PlainExporter;

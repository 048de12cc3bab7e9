//! cw-ui - TUI library for comment-widget
//!
//! This crate provides the terminal front end for the comment widget.
//!
//! # Overview
//!
//! The TUI provides:
//! - The comment thread with replies indented under their comment
//! - Per-unit vote buttons and a delete confirmation modal
//! - Inline reply/edit composers and a new comment composer
//! - Status bar with the current user and messages
//!
//! # Example
//!
//! ```ignore
//! use cw_ui::{App, RenderConfig};
//! use cw_core::CommentWidget;
//!
//! let mut app = App::new(widget, RenderConfig::default())?;
//! app.run()?;
//! ```

pub mod app;
pub mod render;
pub mod theme;

pub use app::{App, AppState, Focus};
pub use render::RenderConfig;
pub use theme::Theme;

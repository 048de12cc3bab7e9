//! cw-core - Core library for comment-widget
//!
//! This crate provides the state behind a nested comment thread: the comment
//! tree store, per-unit vote counters and delete confirmations, the composer,
//! seed loading, configuration, and text export.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod vote;
pub mod composer;
pub mod unit;
pub mod widget;
pub mod seed;
pub mod export;

pub use error::{CwError, Result};
pub use types::*;
pub use widget::{CommentWidget, ComposerSlot};

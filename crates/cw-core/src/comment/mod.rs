//! Comment tree module
//!
//! Holds the comment/reply records, the store that owns them, and the
//! helpers used to build and validate a tree.

pub mod model;
pub mod id;
pub mod store;
pub mod validator;
pub mod builder;

pub use model::*;
pub use id::IdGenerator;
pub use store::{CommentStore, Removed};
pub use validator::TreeValidator;
pub use builder::{CommentBuilder, ReplyBuilder};

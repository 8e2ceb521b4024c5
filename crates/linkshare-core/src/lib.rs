//! # linkshare-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! domain errors. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentView, NewComment, NewPost, NewUser, Post, PostView, User, Vote, VoteToggle,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{CommentRepository, PostRepository, RepoResult, UserRepository, VoteRepository};
pub use value_objects::{Guid, GuidParseError, RecordId, RecordIdParseError};

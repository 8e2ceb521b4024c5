//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod post;
mod user;
mod vote;

pub use comment::{CommentModel, CommentViewModel};
pub use post::{PostModel, PostViewModel};
pub use user::UserModel;
pub use vote::VoteModel;

//! Domain entities - core business objects

mod comment;
mod post;
mod user;
mod vote;

pub use comment::{Comment, CommentView, NewComment};
pub use post::{NewPost, Post, PostView};
pub use user::{NewUser, User};
pub use vote::{Vote, VoteToggle};

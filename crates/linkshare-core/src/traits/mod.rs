//! Repository traits

mod repositories;

pub use repositories::{
    CommentRepository, PostRepository, RepoResult, UserRepository, VoteRepository,
};

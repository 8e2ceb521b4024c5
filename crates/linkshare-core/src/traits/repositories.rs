//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every read skips soft-deleted rows.

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentView, NewComment, NewPost, NewUser, Post, PostView, User, Vote, VoteToggle,
};
use crate::error::DomainError;
use crate::value_objects::{Guid, RecordId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Fails with `UsernameAlreadyExists` or `EmailAlreadyExists` when the
    /// store's unique constraint rejects the row.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>>;

    /// Soft delete a user
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List all posts, highest vote count first, annotated for `viewer`
    async fn list(&self, viewer: Option<RecordId>) -> RepoResult<Vec<PostView>>;

    /// Find a post by guid, annotated for `viewer`
    async fn find_by_guid(&self, guid: &Guid, viewer: Option<RecordId>)
        -> RepoResult<Option<PostView>>;

    /// Create a new post with a zero vote count
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Soft delete a post
    async fn delete(&self, guid: &Guid) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the live vote of a user on a post
    async fn find(&self, user_id: RecordId, post_id: RecordId) -> RepoResult<Option<Vote>>;

    /// Count live votes on a post
    async fn count_live(&self, post_id: RecordId) -> RepoResult<i64>;

    /// Flip the user's vote on a post
    ///
    /// Creates a live vote and increments the post's counter, or retires the
    /// live vote and decrements the counter. Both changes are applied as one
    /// atomic unit. Fails with `PostNotFound` and changes nothing when the guid
    /// does not resolve to a live post.
    async fn toggle(&self, user_id: RecordId, post_guid: &Guid) -> RepoResult<VoteToggle>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by guid
    async fn find_by_guid(&self, guid: &Guid) -> RepoResult<Option<Comment>>;

    /// List a post's comments with author identity, oldest first
    async fn find_by_post(&self, post_id: RecordId) -> RepoResult<Vec<CommentView>>;

    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Soft delete a comment
    async fn delete(&self, guid: &Guid) -> RepoResult<()>;
}

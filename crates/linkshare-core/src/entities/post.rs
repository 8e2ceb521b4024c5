//! Post entity - a submitted link with a title and description

use chrono::{DateTime, Utc};

use crate::value_objects::{Guid, RecordId};

/// Post entity
///
/// `votes` is a cached count; the live rows in the vote ledger are the source
/// of truth and the two are kept equal by `VoteRepository::toggle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: RecordId,
    pub guid: Guid,
    pub user_id: RecordId,
    pub title: String,
    pub description: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new post
///
/// The guid is minted here so the caller knows the public identifier before
/// the row exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub guid: Guid,
    pub user_id: RecordId,
    pub title: String,
    pub description: String,
}

impl NewPost {
    /// Create a new NewPost with a freshly generated guid
    pub fn new(user_id: RecordId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            guid: Guid::new(),
            user_id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Post as seen by a (possibly anonymous) viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub post: Post,
    pub author_username: String,
    /// Whether the viewer holds a live vote on this post; always false for
    /// anonymous viewers
    pub voted: bool,
}

impl PostView {
    /// Create a new PostView
    pub fn new(post: Post, author_username: String, voted: bool) -> Self {
        Self {
            post,
            author_username,
            voted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_generates_guid() {
        let a = NewPost::new(RecordId::new(1), "Title", "Description");
        let b = NewPost::new(RecordId::new(1), "Title", "Description");
        assert_ne!(a.guid, b.guid);
        assert_eq!(a.user_id, RecordId::new(1));
    }
}

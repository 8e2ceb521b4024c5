//! Comment entity - free-text reply attached to a post

use chrono::{DateTime, Utc};

use crate::value_objects::{Guid, RecordId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: RecordId,
    pub guid: Guid,
    pub user_id: RecordId,
    pub post_id: RecordId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Check if the comment was written by the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: RecordId) -> bool {
        self.user_id == user_id
    }
}

/// Data required to insert a new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub guid: Guid,
    pub user_id: RecordId,
    pub post_id: RecordId,
    pub body: String,
}

impl NewComment {
    /// Create a new NewComment with a freshly generated guid
    pub fn new(user_id: RecordId, post_id: RecordId, body: impl Into<String>) -> Self {
        Self {
            guid: Guid::new(),
            user_id,
            post_id,
            body: body.into(),
        }
    }
}

/// Comment joined with its author's identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author_username: String,
}

impl CommentView {
    /// Create a new CommentView
    pub fn new(comment: Comment, author_username: String) -> Self {
        Self {
            comment,
            author_username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(body: &str) -> Comment {
        let now = Utc::now();
        Comment {
            id: RecordId::new(1),
            guid: Guid::new(),
            user_id: RecordId::new(2),
            post_id: RecordId::new(3),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_owned_by() {
        let c = comment("nice link");
        assert!(c.is_owned_by(RecordId::new(2)));
        assert!(!c.is_owned_by(RecordId::new(3)));
    }
}

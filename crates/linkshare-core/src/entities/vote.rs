//! Vote entity - one user's upvote on one post

use chrono::{DateTime, Utc};

use crate::value_objects::{Guid, RecordId};

/// A live vote row
///
/// At most one live vote exists per `(user_id, post_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: RecordId,
    pub user_id: RecordId,
    pub post_id: RecordId,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a vote toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteToggle {
    pub post_id: RecordId,
    pub post_guid: Guid,
    /// Whether the user holds a live vote after the toggle
    pub voted: bool,
    /// The post's vote count after the toggle
    pub votes: i32,
}

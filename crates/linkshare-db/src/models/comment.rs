//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub guid: Uuid,
    pub user_id: i64,
    pub post_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CommentModel {
    /// Check if comment is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Comment row joined with its author's username
#[derive(Debug, Clone, FromRow)]
pub struct CommentViewModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub author_username: String,
}

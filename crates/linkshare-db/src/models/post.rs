//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub guid: Uuid,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PostModel {
    /// Check if post is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Post row joined with its author and the viewer's vote state
#[derive(Debug, Clone, FromRow)]
pub struct PostViewModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub author_username: String,
    pub voted: bool,
}

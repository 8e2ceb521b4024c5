//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
///
/// A row with `deleted_at` set is a retired vote kept as history.
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VoteModel {
    /// Check if this vote is live
    #[inline]
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

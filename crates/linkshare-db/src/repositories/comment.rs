//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use linkshare_core::entities::{Comment, CommentView, NewComment};
use linkshare_core::error::DomainError;
use linkshare_core::traits::{CommentRepository, RepoResult};
use linkshare_core::value_objects::{Guid, RecordId};

use crate::models::{CommentModel, CommentViewModel};

use super::error::{comment_not_found, map_db_error, map_foreign_key_violation, user_not_found};

/// Name of the foreign key from comments to posts
const POST_FOREIGN_KEY: &str = "comments_post_id_fkey";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_guid(&self, guid: &Guid) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, guid, user_id, post_id, body, created_at, updated_at, deleted_at
            FROM comments
            WHERE guid = $1 AND deleted_at IS NULL
            ",
        )
        .bind(guid.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: RecordId) -> RepoResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentViewModel>(
            r"
            SELECT c.id, c.guid, c.user_id, c.post_id, c.body,
                   c.created_at, c.updated_at, c.deleted_at,
                   u.username AS author_username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1 AND c.deleted_at IS NULL
            ORDER BY c.created_at ASC, c.id ASC
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentView::from).collect())
    }

    #[instrument(skip(self, comment), fields(guid = %comment.guid, post_id = %comment.post_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (guid, user_id, post_id, body)
            SELECT $1, u.id, $3, $4
            FROM users u
            WHERE u.id = $2 AND u.deleted_at IS NULL
            RETURNING id, guid, user_id, post_id, body, created_at, updated_at, deleted_at
            ",
        )
        .bind(comment.guid.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(&comment.body)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| match constraint {
                Some(POST_FOREIGN_KEY) => DomainError::PostNotFound(comment.post_id.to_string()),
                _ => user_not_found(comment.user_id),
            })
        })?
        .ok_or_else(|| user_not_found(comment.user_id))?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, guid: &Guid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE guid = $1 AND deleted_at IS NULL
            ",
        )
        .bind(guid.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(guid));
        }

        Ok(())
    }
}

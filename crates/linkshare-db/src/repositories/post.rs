//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use linkshare_core::entities::{NewPost, Post, PostView};
use linkshare_core::traits::{PostRepository, RepoResult};
use linkshare_core::value_objects::{Guid, RecordId};

use crate::models::{PostModel, PostViewModel};

use super::error::{map_db_error, map_foreign_key_violation, post_not_found, user_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn list(&self, viewer: Option<RecordId>) -> RepoResult<Vec<PostView>> {
        // A NULL viewer never matches a vote row, so anonymous reads see voted = false
        let rows = sqlx::query_as::<_, PostViewModel>(
            r"
            SELECT p.id, p.guid, p.user_id, p.title, p.description, p.votes,
                   p.created_at, p.updated_at, p.deleted_at,
                   u.username AS author_username,
                   EXISTS(
                       SELECT 1 FROM votes v
                       WHERE v.post_id = p.id AND v.user_id = $1 AND v.deleted_at IS NULL
                   ) AS voted
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.deleted_at IS NULL
            ORDER BY p.votes DESC, p.created_at DESC, p.id DESC
            ",
        )
        .bind(viewer.map(RecordId::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PostView::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_guid(
        &self,
        guid: &Guid,
        viewer: Option<RecordId>,
    ) -> RepoResult<Option<PostView>> {
        let result = sqlx::query_as::<_, PostViewModel>(
            r"
            SELECT p.id, p.guid, p.user_id, p.title, p.description, p.votes,
                   p.created_at, p.updated_at, p.deleted_at,
                   u.username AS author_username,
                   EXISTS(
                       SELECT 1 FROM votes v
                       WHERE v.post_id = p.id AND v.user_id = $2 AND v.deleted_at IS NULL
                   ) AS voted
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.guid = $1 AND p.deleted_at IS NULL
            ",
        )
        .bind(guid.into_inner())
        .bind(viewer.map(RecordId::into_inner))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PostView::from))
    }

    #[instrument(skip(self, post), fields(guid = %post.guid, user_id = %post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (guid, user_id, title, description, votes)
            SELECT $1, u.id, $3, $4, 0
            FROM users u
            WHERE u.id = $2 AND u.deleted_at IS NULL
            RETURNING id, guid, user_id, title, description, votes,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(post.guid.into_inner())
        .bind(post.user_id.into_inner())
        .bind(&post.title)
        .bind(&post.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| user_not_found(post.user_id)))?
        .ok_or_else(|| user_not_found(post.user_id))?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, guid: &Guid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE guid = $1 AND deleted_at IS NULL
            ",
        )
        .bind(guid.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(guid));
        }

        Ok(())
    }
}

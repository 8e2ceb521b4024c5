//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use linkshare_core::entities::{Vote, VoteToggle};
use linkshare_core::traits::{RepoResult, VoteRepository};
use linkshare_core::value_objects::{Guid, RecordId};

use crate::models::VoteModel;

use super::error::{map_db_error, map_foreign_key_violation, post_not_found, user_not_found};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: RecordId, post_id: RecordId) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT id, user_id, post_id, created_at, updated_at, deleted_at
            FROM votes
            WHERE user_id = $1 AND post_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn count_live(&self, post_id: RecordId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM votes WHERE post_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: RecordId, post_guid: &Guid) -> RepoResult<VoteToggle> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock on the post serializes concurrent toggles for the same post.
        // Returning early drops `tx`, which rolls it back.
        let post_id = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM posts
            WHERE guid = $1 AND deleted_at IS NULL
            FOR UPDATE
            ",
        )
        .bind(post_guid.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| post_not_found(post_guid))?;

        let voter_is_live = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS (SELECT 1 FROM users WHERE id = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
        if !voter_is_live {
            return Err(user_not_found(user_id));
        }

        let live_vote = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM votes
            WHERE user_id = $1 AND post_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(user_id.into_inner())
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let voted = if let Some(vote_id) = live_vote {
            sqlx::query(
                r"
                UPDATE votes
                SET deleted_at = NOW(), updated_at = NOW()
                WHERE id = $1
                ",
            )
            .bind(vote_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
            false
        } else {
            sqlx::query(
                r"
                INSERT INTO votes (user_id, post_id)
                VALUES ($1, $2)
                ",
            )
            .bind(user_id.into_inner())
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_foreign_key_violation(e, |_| user_not_found(user_id)))?;
            true
        };

        let delta: i32 = if voted { 1 } else { -1 };
        let votes = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE posts
            SET votes = votes + $2, updated_at = NOW()
            WHERE id = $1
            RETURNING votes
            ",
        )
        .bind(post_id)
        .bind(delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(post_id, voted, votes, "Vote toggled");

        Ok(VoteToggle {
            post_id: RecordId::new(post_id),
            post_guid: *post_guid,
            voted,
            votes,
        })
    }
}

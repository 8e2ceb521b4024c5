//! Comment service
//!
//! Handles adding comments to posts and author-only deletion.

use linkshare_core::entities::NewComment;
use linkshare_core::{DomainError, RecordId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_guid;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a post
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        user_id: RecordId,
        post_guid: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        let guid = parse_guid("Post", post_guid)?;
        let post = self
            .ctx
            .post_repo()
            .find_by_guid(&guid, None)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_guid))?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment::new(user_id, post.post.id, request.body))
            .await?;

        info!(guid = %comment.guid, post_guid = %guid, "Comment added");

        Ok(CommentResponse {
            guid: comment.guid.to_string(),
            author: author.username,
            body: comment.body,
            deletable: true,
            created_at: comment.created_at,
        })
    }

    /// Delete a comment; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, user_id: RecordId, comment_guid: &str) -> ServiceResult<()> {
        let guid = parse_guid("Comment", comment_guid)?;
        let comment = self
            .ctx
            .comment_repo()
            .find_by_guid(&guid)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_guid))?;

        if !comment.is_owned_by(user_id) {
            warn!(owner_id = %comment.user_id, "Comment deletion refused: not the author");
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(&guid).await?;

        info!(guid = %guid, "Comment deleted");
        Ok(())
    }
}

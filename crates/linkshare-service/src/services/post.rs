//! Post service
//!
//! Handles post submission, the ranked front page, and post detail pages.

use linkshare_core::entities::NewPost;
use linkshare_core::RecordId;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreatePostRequest, PostDetailResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_guid;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new post; it starts with zero votes
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        user_id: RecordId,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let new_post = NewPost::new(user_id, request.title, request.description);
        let post = self.ctx.post_repo().create(&new_post).await?;

        info!(guid = %post.guid, "Post created");

        Ok(PostResponse {
            guid: post.guid.to_string(),
            title: post.title,
            description: post.description,
            votes: post.votes,
            author: author.username,
            voted: false,
            created_at: post.created_at,
        })
    }

    /// List every post, most votes first
    #[instrument(skip(self))]
    pub async fn list_posts(&self, viewer: Option<RecordId>) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list(viewer).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Fetch a single post
    #[instrument(skip(self))]
    pub async fn get_post(&self, guid: &str, viewer: Option<RecordId>) -> ServiceResult<PostResponse> {
        let parsed = parse_guid("Post", guid)?;
        self.ctx
            .post_repo()
            .find_by_guid(&parsed, viewer)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| ServiceError::not_found("Post", guid))
    }

    /// Fetch a post together with its comments, oldest comment first
    #[instrument(skip(self))]
    pub async fn get_post_detail(
        &self,
        guid: &str,
        viewer: Option<RecordId>,
    ) -> ServiceResult<PostDetailResponse> {
        let parsed = parse_guid("Post", guid)?;
        let post = self
            .ctx
            .post_repo()
            .find_by_guid(&parsed, viewer)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", guid))?;

        let comments = self.ctx.comment_repo().find_by_post(post.post.id).await?;

        Ok(PostDetailResponse::new(post, comments, viewer))
    }
}

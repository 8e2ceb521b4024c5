//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use linkshare_core::entities::{CommentView, PostView, VoteToggle};
use linkshare_core::value_objects::RecordId;

use super::responses::{CommentResponse, PostDetailResponse, PostResponse, VoteResponse};

// ============================================================================
// Post Mappers
// ============================================================================

impl From<PostView> for PostResponse {
    fn from(view: PostView) -> Self {
        Self {
            guid: view.post.guid.to_string(),
            title: view.post.title,
            description: view.post.description,
            votes: view.post.votes,
            author: view.author_username,
            voted: view.voted,
            created_at: view.post.created_at,
        }
    }
}

impl PostDetailResponse {
    /// Assemble a detail page for `viewer`
    pub fn new(post: PostView, comments: Vec<CommentView>, viewer: Option<RecordId>) -> Self {
        Self {
            post: post.into(),
            comments: comments
                .into_iter()
                .map(|c| CommentResponse::for_viewer(c, viewer))
                .collect(),
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl CommentResponse {
    /// Map a comment, marking it deletable when `viewer` wrote it
    pub fn for_viewer(view: CommentView, viewer: Option<RecordId>) -> Self {
        let deletable = viewer.is_some_and(|id| view.comment.is_owned_by(id));
        Self {
            guid: view.comment.guid.to_string(),
            author: view.author_username,
            body: view.comment.body,
            deletable,
            created_at: view.comment.created_at,
        }
    }
}

// ============================================================================
// Vote Mappers
// ============================================================================

impl From<VoteToggle> for VoteResponse {
    fn from(toggle: VoteToggle) -> Self {
        Self {
            post_guid: toggle.post_guid.to_string(),
            voted: toggle.voted,
            votes: toggle.votes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkshare_core::entities::{Comment, Post};
    use linkshare_core::value_objects::Guid;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: RecordId::new(7),
            guid: Guid::new(),
            user_id: RecordId::new(1),
            title: "Rust".to_string(),
            description: "https://www.rust-lang.org".to_string(),
            votes: 3,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_comment(user_id: i64) -> CommentView {
        let now = Utc::now();
        CommentView::new(
            Comment {
                id: RecordId::new(9),
                guid: Guid::new(),
                user_id: RecordId::new(user_id),
                post_id: RecordId::new(7),
                body: "Nice".to_string(),
                created_at: now,
                updated_at: now,
            },
            "bob".to_string(),
        )
    }

    #[test]
    fn test_post_response_uses_guid() {
        let post = sample_post();
        let guid = post.guid;
        let response = PostResponse::from(PostView::new(post, "alice".to_string(), true));

        assert_eq!(response.guid, guid.to_string());
        assert_eq!(response.author, "alice");
        assert_eq!(response.votes, 3);
        assert!(response.voted);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_comment_deletable_only_for_author() {
        let response = CommentResponse::for_viewer(sample_comment(2), Some(RecordId::new(2)));
        assert!(response.deletable);

        let response = CommentResponse::for_viewer(sample_comment(2), Some(RecordId::new(3)));
        assert!(!response.deletable);

        let response = CommentResponse::for_viewer(sample_comment(2), None);
        assert!(!response.deletable);
    }

    #[test]
    fn test_vote_response() {
        let guid = Guid::new();
        let response = VoteResponse::from(VoteToggle {
            post_id: RecordId::new(1),
            post_guid: guid,
            voted: true,
            votes: 4,
        });
        assert_eq!(response.post_guid, guid.to_string());
        assert!(response.voted);
        assert_eq!(response.votes, 4);
    }
}

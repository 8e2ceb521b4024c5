//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Records are
//! identified by guid only; sequential ids never leave the service layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Post Responses
// ============================================================================

/// Post as shown in listings
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub guid: String,
    pub title: String,
    pub description: String,
    pub votes: i32,
    pub author: String,
    /// Whether the viewer has a live vote on this post
    pub voted: bool,
    pub created_at: DateTime<Utc>,
}

/// Post with its comments
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub guid: String,
    pub author: String,
    pub body: String,
    /// Whether the viewer may delete this comment
    pub deletable: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Outcome of a vote toggle
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub post_guid: String,
    pub voted: bool,
    pub votes: i32,
}

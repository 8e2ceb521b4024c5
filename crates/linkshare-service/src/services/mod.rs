//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod vote;

use linkshare_core::Guid;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use vote::VoteService;

/// Parse a caller-supplied guid; a malformed one names nothing, so it is "not found"
fn parse_guid(resource: &'static str, raw: &str) -> ServiceResult<Guid> {
    Guid::parse(raw).map_err(|_| ServiceError::not_found(resource, raw))
}

#[cfg(test)]
mod testing;

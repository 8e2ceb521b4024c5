//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Each rule carries the exact message shown to the caller.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Message reported for any missing or out-of-range form field
pub const FILL_ALL_FIELDS: &str = "Please fill all fields";

/// Message reported for an empty comment
pub const COMMENT_REQUIRED: &str = "Comment is required";

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 30, message = "Please fill all fields"))]
    pub username: String,

    #[validate(length(min = 6, max = 255, message = "Please fill all fields"))]
    pub email: String,

    #[validate(length(min = 4, message = "Please fill all fields"))]
    pub password: String,

    #[validate(length(min = 4, message = "Please fill all fields"))]
    pub password_confirmation: String,
}

impl RegisterRequest {
    /// Loose shape check: an '@' and a '.' somewhere in the address
    pub fn has_plausible_email(&self) -> bool {
        self.email.contains('@') && self.email.contains('.')
    }

    /// Check that the confirmation repeats the password
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub username: String,

    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Submit a new post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        custom(function = "longer_than_three"),
        length(max = 255, message = "Please fill all fields")
    )]
    pub title: String,

    #[validate(custom(function = "longer_than_three"))]
    pub description: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Comment on a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "not_blank"))]
    pub body: String,
}

fn longer_than_three(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > 3 {
        Ok(())
    } else {
        Err(ValidationError::new("too_short").with_message(Cow::Borrowed(FILL_ALL_FIELDS)))
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required").with_message(Cow::Borrowed(COMMENT_REQUIRED)))
    } else {
        Ok(())
    }
}

//! Test fixtures and data generators
//!
//! Provides reusable request payloads for integration tests.

use linkshare_service::dto::{CreateCommentRequest, CreatePostRequest, LoginRequest, RegisterRequest};

/// Password used by every generated account
pub const TEST_PASSWORD: &str = "TestPass123!";

/// Get a unique suffix for test data
///
/// Random rather than sequential so that repeated runs against the same
/// database never collide.
pub fn unique_suffix() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    id[..12].to_string()
}

/// Registration request for a fresh, unique account
pub fn register_request() -> RegisterRequest {
    register_request_named(&format!("user_{}", unique_suffix()))
}

/// Registration request for a given username
pub fn register_request_named(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: TEST_PASSWORD.to_string(),
        password_confirmation: TEST_PASSWORD.to_string(),
    }
}

/// Login request matching a registration
pub fn login_request(register: &RegisterRequest) -> LoginRequest {
    LoginRequest {
        username: register.username.clone(),
        password: register.password.clone(),
    }
}

/// A valid post submission
pub fn post_request(title: &str) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        description: "https://example.com/some/article".to_string(),
    }
}

/// A comment with the given body
pub fn comment_request(body: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        body: body.to_string(),
    }
}

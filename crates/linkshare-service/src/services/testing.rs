//! Shared fixtures for service tests

use linkshare_core::entities::User;
use linkshare_db::MemoryStore;

use crate::dto::{CreatePostRequest, PostResponse, RegisterRequest};

use super::{AuthService, PostService, ServiceContext};

pub(crate) fn context() -> ServiceContext {
    ServiceContext::in_memory(MemoryStore::new())
}

pub(crate) fn register_request(username: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: password.to_string(),
        password_confirmation: password.to_string(),
    }
}

pub(crate) async fn register(ctx: &ServiceContext, username: &str) -> User {
    AuthService::new(ctx)
        .register(register_request(username, "hunter22"))
        .await
        .unwrap()
}

pub(crate) async fn submit_post(ctx: &ServiceContext, author: &User, title: &str) -> PostResponse {
    PostService::new(ctx)
        .create_post(
            author.id,
            CreatePostRequest {
                title: title.to_string(),
                description: "https://example.com/article".to_string(),
            },
        )
        .await
        .unwrap()
}

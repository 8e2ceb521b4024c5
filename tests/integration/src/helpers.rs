//! Test helpers for integration tests
//!
//! Wraps a `ServiceContext` over either backend and offers shortcuts for the
//! common setup steps.

use anyhow::Result;
use linkshare_core::entities::User;
use linkshare_db::{run_migrations, MemoryStore, PgPool};
use linkshare_service::dto::PostResponse;
use linkshare_service::{AuthService, PostService, ServiceContext};

use crate::fixtures::{post_request, register_request};

/// Which store a [`TestApp`] runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Postgres,
}

/// Service context plus the backend it talks to
#[derive(Debug, Clone)]
pub struct TestApp {
    pub ctx: ServiceContext,
    pub backend: Backend,
}

impl TestApp {
    /// Fresh in-memory application
    pub fn memory() -> Self {
        Self {
            ctx: ServiceContext::in_memory(MemoryStore::new()),
            backend: Backend::Memory,
        }
    }

    /// Application backed by PostgreSQL, if `DATABASE_URL` is set and reachable
    pub async fn postgres() -> Option<Self> {
        let _ = dotenvy::dotenv();
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPool::connect(&url).await.ok()?;
        run_migrations(&pool, None).await.ok()?;

        Some(Self {
            ctx: ServiceContext::from_pool(pool),
            backend: Backend::Postgres,
        })
    }

    /// Every backend available in this environment
    pub async fn all() -> Vec<Self> {
        let mut apps = vec![Self::memory()];
        match Self::postgres().await {
            Some(app) => apps.push(app),
            None => eprintln!("Skipping PostgreSQL backend: DATABASE_URL not set"),
        }
        apps
    }

    /// Register a fresh, uniquely named user
    pub async fn register_user(&self) -> Result<User> {
        Ok(AuthService::new(&self.ctx).register(register_request()).await?)
    }

    /// Submit a post as `author`
    pub async fn submit_post(&self, author: &User, title: &str) -> Result<PostResponse> {
        Ok(PostService::new(&self.ctx)
            .create_post(author.id, post_request(title))
            .await?)
    }

    /// Current vote count of a post as seen by an anonymous reader
    pub async fn votes_of(&self, guid: &str) -> Result<i32> {
        Ok(PostService::new(&self.ctx).get_post(guid, None).await?.votes)
    }
}

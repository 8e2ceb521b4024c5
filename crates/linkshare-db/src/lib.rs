//! # linkshare-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx,
//! plus an in-memory store implementing the same traits.
//!
//! ## Overview
//!
//! - Connection pool management and runtime-loaded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - [`MemoryStore`], a process-local implementation of every repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkshare_db::{create_pool, run_migrations, PgPostRepository, PoolConfig};
//! use linkshare_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     run_migrations(&pool, None).await?;
//!
//!     let posts = PgPostRepository::new(pool);
//!     let front_page = posts.list(None).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig, DEFAULT_MIGRATIONS_DIR};
pub use repositories::{
    PgCommentRepository, PgPostRepository, PgUserRepository, PgVoteRepository,
};

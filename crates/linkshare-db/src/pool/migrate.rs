//! Schema migrations
//!
//! Migrations are plain SQL files loaded at runtime, so the crate builds
//! without a live database.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::Path;
use tracing::{info, instrument};

/// Migrations shipped with this crate
pub const DEFAULT_MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply every pending migration from `dir` (or the bundled set)
///
/// Returns the number of migrations known to the migrator.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool, dir: Option<&str>) -> Result<usize, MigrateError> {
    let dir = dir.unwrap_or(DEFAULT_MIGRATIONS_DIR);
    let migrator = Migrator::new(Path::new(dir)).await?;
    migrator.run(pool).await?;

    let count = migrator.iter().count();
    info!(count, dir, "Migrations applied");
    Ok(count)
}

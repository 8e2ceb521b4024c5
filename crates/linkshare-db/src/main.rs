//! Schema migration runner
//!
//! Run with:
//! ```bash
//! cargo run -p linkshare-db --bin linkshare-migrate
//! ```
//!
//! Reads `DATABASE_URL` and `DATABASE_MIGRATIONS_DIR` from the environment
//! or a `.env` file.

use linkshare_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use linkshare_db::{create_pool, run_migrations, PoolConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::from(&config.log)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Migration failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(env = ?config.app.env, app = %config.app.name, "Running migrations");

    let pool = create_pool(&PoolConfig::from(&config.database)).await?;
    let count = run_migrations(&pool, config.database.migrations_dir.as_deref()).await?;
    pool.close().await;

    info!(count, "Database schema is up to date");
    Ok(())
}

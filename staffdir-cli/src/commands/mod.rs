//! Command implementations for the staffdir CLI

pub mod completions;
pub mod list;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use staffdir_core::DirectoryConfig;
use staffdir_server::db::{create_pool, migrations};

// Re-export main dispatcher functions for flat access from main.rs
pub use completions::run_completions;
pub use list::run_list;
pub use seed::run_seed;
pub use serve::run_serve;

/// Open the configured database (or `url_override`) and make sure the schema exists.
pub(crate) async fn connect(config: &DirectoryConfig, url_override: Option<String>) -> Result<SqlitePool> {
    let url = url_override.unwrap_or_else(|| config.database.url.clone());
    tracing::debug!(%url, "Opening database");

    let pool = create_pool(&url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", url))?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}

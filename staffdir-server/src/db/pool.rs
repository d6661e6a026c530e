//! Database connection pool management
//!
//! Uses a sqlx SqlitePool with explicit connection limits.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Create a SQLite connection pool, creating the database file if missing.
///
/// In-memory URLs get a single connection that is never recycled, since
/// every SQLite connection to `:memory:` would otherwise see its own empty
/// database.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://staffdir.db", 5).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    if in_memory {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    options = options.journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}

/// Private in-memory database, mostly for tests.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    create_pool("sqlite::memory:", 1).await
}

//! Database lifecycle: create the SQLite file and open the pool.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Ensure the database in `database_url` exists; create it if not. In-memory urls are left alone.
/// Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if !Sqlite::database_exists(database_url).await? {
        tracing::info!(url = %database_url, "creating database");
        Sqlite::create_database(database_url).await?;
    }
    Ok(())
}

/// Open the connection pool. Foreign keys are enforced on every connection.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

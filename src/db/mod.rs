//! SQLite storage for player registrations.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::AppError;

mod migrations;
mod models;
mod repository;

pub use migrations::run_migrations;
pub use models::{NewPlayer, Player};
pub use repository::Repository;

/// Open the pool behind `database_url`, creating the database file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    info!(url = database_url, "🗄️ Database connected");
    Ok(pool)
}

/// Fresh in-memory database with the schema applied.
///
/// A single connection is kept since every `:memory:` connection is its own database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    run_migrations(&pool).await.expect("schema");
    pool
}

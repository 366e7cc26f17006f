use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::AppError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id INTEGER NOT NULL,
    display_name TEXT NOT NULL,
    contact TEXT NOT NULL,
    game TEXT NOT NULL,
    note TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_players_game ON players(game);
CREATE INDEX IF NOT EXISTS idx_players_owner ON players(owner_id);
"#;

/// Columns introduced after the first deployment, added in place on older databases.
const LATE_COLUMNS: [(&str, &str); 2] = [
    ("avatar_url", "TEXT"),
    ("owner_display_name", "TEXT NOT NULL DEFAULT ''"),
];

/// Bring the schema up to date. Safe to run on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;

    for (column, definition) in LATE_COLUMNS {
        add_column_if_missing(pool, "players", column, definition).await?;
    }

    info!("🗄️ Database migrations completed");
    Ok(())
}

async fn add_column_if_missing(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    definition: &str,
) -> Result<bool, AppError> {
    let columns = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(pool)
        .await?;

    if columns.iter().any(|c| c == column) {
        debug!(table, column, "column already present");
        return Ok(false);
    }

    sqlx::query(&format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"))
        .execute(pool)
        .await?;
    info!(table, column, "🗄️ Added column");
    Ok(true)
}

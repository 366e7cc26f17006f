use sqlx::SqlitePool;

use super::models::{NewPlayer, Player};
use crate::error::AppError;

const PLAYER_COLUMNS: &str =
    "id, owner_id, display_name, contact, game, note, avatar_url, owner_display_name";

#[derive(Clone, Debug)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a registration. Nothing stops the same user registering the same game twice.
    pub async fn insert(&self, player: &NewPlayer) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players
                (owner_id, display_name, contact, game, note, avatar_url, owner_display_name)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(player.owner_id as i64)
        .bind(&player.display_name)
        .bind(&player.contact)
        .bind(player.game)
        .bind(&player.note)
        .bind(player.avatar_url.as_deref())
        .bind(&player.owner_display_name)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Remove every registration of a user, across all games.
    pub async fn delete_by_owner(&self, owner_id: u64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM players WHERE owner_id = ?")
            .bind(owner_id as i64)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count_by_game(&self, game: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players WHERE game = ?")
            .bind(game)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn list_by_game(&self, game: &str) -> Result<Vec<Player>, AppError> {
        let players = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE game = ?"
        ))
        .bind(game)
        .fetch_all(&self.pool)
        .await?;
        Ok(players)
    }
}

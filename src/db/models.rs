use sqlx::FromRow;

/// One registration of a Discord user for one game.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Player {
    pub id: i64,
    pub owner_id: i64,
    pub display_name: String,
    pub contact: String,
    pub game: String,
    pub note: String,
    pub avatar_url: Option<String>,
    pub owner_display_name: String,
}

/// Values written by a sign-up; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub owner_id: u64,
    pub display_name: String,
    pub contact: String,
    /// Already canonicalised against [`crate::games::GAMES`].
    pub game: &'static str,
    pub note: String,
    pub avatar_url: Option<String>,
    pub owner_display_name: String,
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The user has already been told this interaction failed.
    #[error("{0} (user notified)")]
    Notified(Box<AppError>),
}

impl AppError {
    pub fn is_notified(&self) -> bool {
        matches!(self, AppError::Notified(_))
    }
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

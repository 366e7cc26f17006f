use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite:squadseek.db";
const DEFAULT_BANNER_URL: &str = "https://i.postimg.cc/5t45MXS2/banner.png";
const DEFAULT_SIGNUP_TIMEOUT_SECS: u64 = 5 * 60;
const DEFAULT_VIEW_TIMEOUT_SECS: u64 = 180;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub banner_url: String,
    /// How long a sign-up form stays open before it is abandoned.
    pub signup_timeout: Duration,
    /// Idle time after which a picker or confirmation prompt stops listening.
    pub view_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| AppError::Config("DISCORD_TOKEN must be set".into()))?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let banner_url =
            env::var("SETUP_BANNER_URL").unwrap_or_else(|_| DEFAULT_BANNER_URL.into());

        let signup_timeout = secs_or(
            env::var("SIGNUP_TIMEOUT_SECS").ok().as_deref(),
            DEFAULT_SIGNUP_TIMEOUT_SECS,
        );
        let view_timeout = secs_or(
            env::var("VIEW_TIMEOUT_SECS").ok().as_deref(),
            DEFAULT_VIEW_TIMEOUT_SECS,
        );

        Ok(Self {
            discord_token,
            database_url,
            banner_url,
            signup_timeout,
            view_timeout,
        })
    }
}

fn secs_or(raw: Option<&str>, default: u64) -> Duration {
    let secs = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_seconds() {
        assert_eq!(secs_or(Some("42"), 7), Duration::from_secs(42));
        assert_eq!(secs_or(Some(" 10 "), 7), Duration::from_secs(10));
    }

    #[test]
    fn falls_back_on_missing_or_invalid_values() {
        assert_eq!(secs_or(None, 300), Duration::from_secs(300));
        assert_eq!(secs_or(Some("soon"), 300), Duration::from_secs(300));
        assert_eq!(secs_or(Some("-5"), 300), Duration::from_secs(300));
        assert_eq!(secs_or(Some("0"), 180), Duration::from_secs(180));
    }
}

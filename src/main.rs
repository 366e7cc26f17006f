use poise::serenity_prelude as serenity;
use tracing::info;

use config::Config;
use db::Repository;
use discord::{Data, create_framework};
use error::AppError;

mod config;
mod db;
mod discord;
mod error;
mod games;
mod logging;
mod squad;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    info!("🐙 Starting SquadSeek...");

    let config = Config::from_env()?;

    let pool = db::connect(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let data = Data {
        db: Repository::new(pool),
        banner_url: config.banner_url,
        signup_timeout: config.signup_timeout,
        view_timeout: config.view_timeout,
    };

    let intents = serenity::GatewayIntents::non_privileged();
    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(create_framework(data))
        .await?;

    client.start().await?;

    Ok(())
}

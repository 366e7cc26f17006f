use std::time::Duration;

use poise::CreateReply;
use tracing::{error, info};

use crate::db::Repository;
use crate::error::AppError;

use super::failure::GENERIC_FAILURE;
use super::{commands, handler};

/// Shared data accessible in all commands and interaction flows
#[derive(Debug)]
pub struct Data {
    pub db: Repository,
    pub banner_url: String,
    pub signup_timeout: Duration,
    pub view_timeout: Duration,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub fn create_framework(data: Data) -> poise::Framework<Data, AppError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::setup(),
                commands::games(),
                commands::delete_my_data(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handler::event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    handle_error(error).await;
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    bot_name = %ready.user.name,
                    guild_count = ready.guilds.len(),
                    "🎮 Bot is ready"
                );
                Ok(data)
            })
        })
        .build()
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                error = ?error,
                command = ctx.command().name.as_str(),
                user_id = %ctx.author().id,
                "🎮 ❌ Command execution failed"
            );
            if error.is_notified() {
                return;
            }
            let _ = ctx
                .send(
                    CreateReply::default()
                        .content(GENERIC_FAILURE)
                        .ephemeral(true),
                )
                .await;
        }
        poise::FrameworkError::EventHandler { error, .. } => {
            error!(error = ?error, "🎮 ❌ Event handler failed");
        }
        other => {
            error!(error = ?other, "🎮 ❌ Unhandled framework error");
        }
    }
}

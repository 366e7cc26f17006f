use poise::serenity_prelude::CreateMessage;
use tracing::{info, instrument};

use crate::discord::bot::Context;
use crate::discord::{components, embeds};
use crate::error::AppError;

/// Set up the SquadSeek embed
#[poise::command(slash_command)]
#[instrument(
    skip(ctx),
    fields(
        user_id = %ctx.author().id,
        channel_id = %ctx.channel_id()
    )
)]
pub async fn setup(ctx: Context<'_>) -> Result<(), AppError> {
    let bot = ctx.http().get_current_user().await?;
    let embed = embeds::setup_embed(bot.avatar_url(), &ctx.data().banner_url);

    ctx.channel_id()
        .send_message(
            ctx.serenity_context(),
            CreateMessage::new()
                .embed(embed)
                .components(vec![components::entry_buttons()]),
        )
        .await?;

    ctx.send(
        poise::CreateReply::default()
            .content("SquadSeek embed has been set up!")
            .ephemeral(true),
    )
    .await?;

    info!("Setup message posted");

    Ok(())
}

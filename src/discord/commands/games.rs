use crate::discord::bot::Context;
use crate::discord::embeds;
use crate::error::AppError;

/// List all available games
#[poise::command(slash_command, ephemeral)]
pub async fn games(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.send(
        poise::CreateReply::default()
            .embed(embeds::games_embed())
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

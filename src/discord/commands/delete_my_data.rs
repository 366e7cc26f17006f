use tracing::instrument;

use crate::discord::bot::Context;
use crate::discord::components;
use crate::discord::interactions::deletion::await_decision;
use crate::error::AppError;
use crate::squad::deletion::COMMAND_PROMPT;

/// Delete your data from the player database
#[poise::command(slash_command, ephemeral)]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn delete_my_data(ctx: Context<'_>) -> Result<(), AppError> {
    let session = ctx.id();

    ctx.send(
        poise::CreateReply::default()
            .content(COMMAND_PROMPT)
            .components(vec![components::deletion_buttons(session)])
            .ephemeral(true),
    )
    .await?;

    await_decision(ctx.serenity_context(), ctx.data(), ctx.author().id, session).await
}

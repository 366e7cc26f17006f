use std::pin::pin;

use futures::StreamExt;
use poise::serenity_prelude::{
    self as serenity, ComponentInteraction, ComponentInteractionCollector,
    CreateInteractionResponse, CreateInteractionResponseMessage, UserId,
};
use tracing::{debug, instrument};

use crate::discord::bot::Data;
use crate::discord::{components, failure, ids};
use crate::error::AppError;
use crate::squad::deletion::{self, DeletionDecision};

/// Ask for confirmation from the setup message button, then apply the answer.
#[instrument(skip_all, fields(user_id = %interaction.user.id))]
pub async fn prompt(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let session = interaction.id.get();

    interaction
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(deletion::PROMPT)
                    .components(vec![components::deletion_buttons(session)])
                    .ephemeral(true),
            ),
        )
        .await?;

    await_decision(ctx, data, interaction.user.id, session).await
}

/// Wait for Confirm or Cancel on the prompt of `session` and replace the prompt with the result.
pub async fn await_decision(
    ctx: &serenity::Context,
    data: &Data,
    user_id: UserId,
    session: u64,
) -> Result<(), AppError> {
    let mut presses = pin!(
        ComponentInteractionCollector::new(ctx)
            .author_id(user_id)
            .filter(move |press| ids::in_session(&press.data.custom_id, session))
            .stream()
    );

    loop {
        let Ok(Some(press)) = tokio::time::timeout(data.view_timeout, presses.next()).await else {
            debug!("Deletion prompt expired");
            return Ok(());
        };

        let Some(decision) = decision_for(&press.data.custom_id) else {
            debug!(custom_id = %press.data.custom_id, "Ignoring unexpected press on deletion prompt");
            press
                .create_response(ctx, CreateInteractionResponse::Acknowledge)
                .await?;
            continue;
        };

        let outcome = match deletion::resolve(&data.db, press.user.id.get(), decision).await {
            Ok(outcome) => outcome,
            Err(error) => return Err(failure::notify_component(ctx, &press, error).await),
        };

        press
            .create_response(
                ctx,
                CreateInteractionResponse::UpdateMessage(
                    CreateInteractionResponseMessage::new()
                        .content(outcome.message())
                        .components(vec![]),
                ),
            )
            .await?;

        return Ok(());
    }
}

fn decision_for(custom_id: &str) -> Option<DeletionDecision> {
    match ids::parse_scoped(custom_id)? {
        (ids::CONFIRM_DELETION, _) => Some(DeletionDecision::Confirm),
        (ids::CANCEL_DELETION, _) => Some(DeletionDecision::Cancel),
        _ => None,
    }
}

//! Telling users an interaction failed, on whichever interaction is still waiting for an answer.

use poise::serenity_prelude::{
    self as serenity, ComponentInteraction, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, ModalInteraction,
};
use tracing::warn;

use crate::error::AppError;

/// Message shown to a user when handling their interaction failed.
pub const GENERIC_FAILURE: &str = "Something went wrong, please try again later.";

pub fn failure_response() -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(GENERIC_FAILURE)
            .ephemeral(true),
    )
}

/// Answer a pending modal submission with the failure message.
pub async fn notify_modal(
    ctx: &serenity::Context,
    submission: &ModalInteraction,
    error: AppError,
) -> AppError {
    if let Err(err) = submission.create_response(ctx, failure_response()).await {
        warn!(error = %err, "🎮 ⚠️ Could not report failure to user");
    }
    AppError::Notified(Box::new(error))
}

/// Answer a pending component press with the failure message.
pub async fn notify_component(
    ctx: &serenity::Context,
    press: &ComponentInteraction,
    error: AppError,
) -> AppError {
    if let Err(err) = press.create_response(ctx, failure_response()).await {
        warn!(error = %err, "🎮 ⚠️ Could not report failure to user");
    }
    AppError::Notified(Box::new(error))
}

/// Report on an interaction that may or may not have been answered already.
pub async fn report(ctx: &serenity::Context, component: &ComponentInteraction) {
    if component.create_response(ctx, failure_response()).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(GENERIC_FAILURE)
        .ephemeral(true);
    if let Err(err) = component.create_followup(ctx, followup).await {
        warn!(error = %err, "🎮 ⚠️ Could not report failure to user");
    }
}

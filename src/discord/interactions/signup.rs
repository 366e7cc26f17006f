use poise::serenity_prelude::{
    self as serenity, ComponentInteraction, CreateInteractionResponse,
    CreateInteractionResponseMessage, ModalInteractionCollector,
};
use tracing::{debug, instrument};

use crate::discord::bot::Data;
use crate::discord::{components, failure, ids};
use crate::error::AppError;
use crate::squad::registration::{self, Submitter};

/// Show the sign-up form and store the submission, if any arrives in time.
#[instrument(skip_all, fields(user_id = %interaction.user.id))]
pub async fn open(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let form_id = ids::scoped(ids::SIGN_UP_FORM, interaction.id.get());

    interaction
        .create_response(
            ctx,
            CreateInteractionResponse::Modal(components::sign_up_modal(&form_id)),
        )
        .await?;

    let Some(submission) = ModalInteractionCollector::new(ctx)
        .author_id(interaction.user.id)
        .filter(move |modal| modal.data.custom_id == form_id)
        .timeout(data.signup_timeout)
        .await
    else {
        debug!("Sign-up form abandoned");
        return Ok(());
    };

    let form = components::read_sign_up_form(&submission.data.components);
    let submitter = Submitter {
        owner_id: submission.user.id.get(),
        display_name: submission.user.display_name().to_string(),
        avatar_url: submission.user.avatar_url(),
    };

    let outcome = match registration::register(&data.db, &submitter, form).await {
        Ok(outcome) => outcome,
        Err(error) => return Err(failure::notify_modal(ctx, &submission, error).await),
    };

    submission
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(outcome.message())
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

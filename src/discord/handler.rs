use poise::serenity_prelude::{self as serenity, ComponentInteraction};
use tracing::error;

use super::bot::Data;
use super::interactions::{deletion, finder, signup};
use super::{failure, ids};
use crate::error::AppError;

/// Routes presses on the setup message buttons to their flows.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, AppError>,
    data: &Data,
) -> Result<(), AppError> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        dispatch(ctx, data, component).await;
    }

    Ok(())
}

async fn dispatch(ctx: &serenity::Context, data: &Data, component: &ComponentInteraction) {
    // Session scoped ids are consumed by the collectors of the flow that owns them.
    let result = match component.data.custom_id.as_str() {
        ids::SIGN_UP => signup::open(ctx, data, component).await,
        ids::FIND_PLAYERS => finder::open(ctx, data, component).await,
        ids::DELETE_DATA => deletion::prompt(ctx, data, component).await,
        _ => return,
    };

    if let Err(error) = result {
        error!(
            error = ?error,
            custom_id = component.data.custom_id.as_str(),
            user_id = %component.user.id,
            "🎮 ❌ Interaction failed"
        );
        if !error.is_notified() {
            failure::report(ctx, component).await;
        }
    }
}

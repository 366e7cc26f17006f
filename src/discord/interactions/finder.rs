use std::pin::pin;

use futures::StreamExt;
use poise::serenity_prelude::{
    self as serenity, ComponentInteraction, ComponentInteractionCollector,
    ComponentInteractionDataKind, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use tracing::{debug, instrument};

use crate::discord::bot::Data;
use crate::discord::{components, embeds, failure, ids};
use crate::error::AppError;
use crate::squad::discovery::{self, BrowseSession, BrowseState};

const PICKER_PROMPT: &str = "Select a game to find players:";

/// Offer the game picker, then page through the chosen game's players in place.
#[instrument(skip_all, fields(user_id = %interaction.user.id, session = interaction.id.get()))]
pub async fn open(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let session_id = interaction.id.get();
    let counts = discovery::game_counts(&data.db).await?;

    interaction
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(PICKER_PROMPT)
                    .components(vec![components::game_picker(session_id, &counts)])
                    .ephemeral(true),
            ),
        )
        .await?;

    // One collector for the whole session so presses arriving mid-update are queued.
    let mut presses = pin!(
        ComponentInteractionCollector::new(ctx)
            .author_id(interaction.user.id)
            .filter(move |press| ids::in_session(&press.data.custom_id, session_id))
            .stream()
    );

    let mut session = BrowseSession::new();

    while let Ok(Some(press)) = tokio::time::timeout(data.view_timeout, presses.next()).await {
        match ids::parse_scoped(&press.data.custom_id) {
            Some((ids::GAME_PICKER, _)) => {
                if let ComponentInteractionDataKind::StringSelect { values } = &press.data.kind {
                    if let Some(value) = values.first() {
                        if let Err(error) =
                            discovery::pick_game(&data.db, &mut session, value).await
                        {
                            return Err(failure::notify_component(ctx, &press, error).await);
                        }
                    }
                }
            }
            Some((ids::PREVIOUS, _)) => {
                session.previous_card();
            }
            Some((ids::NEXT, _)) => {
                session.next_card();
            }
            _ => {}
        }

        press.create_response(ctx, render(&session, session_id)).await?;

        if session.state() == BrowseState::Exhausted {
            break;
        }
    }

    session.close();
    debug!(
        game = session.game(),
        position = session.cursor(),
        total = session.len(),
        "Browsing session ended"
    );

    Ok(())
}

fn render(session: &BrowseSession, session_id: u64) -> CreateInteractionResponse {
    match (session.state(), session.game(), session.current()) {
        (BrowseState::Browsing, Some(game), Some(player)) => {
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content("")
                    .embed(embeds::player_card(game, player))
                    .components(vec![components::browse_buttons(session_id, session)]),
            )
        }
        (BrowseState::PickingGame, ..) => CreateInteractionResponse::Acknowledge,
        _ => CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new()
                .content(session.exhausted_message())
                .embeds(vec![])
                .components(vec![]),
        ),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    use super::*;
    use crate::db::Player;

    const SESSION: u64 = 555;

    fn player(id: i64) -> Player {
        Player {
            id,
            owner_id: id,
            display_name: format!("Player {id}"),
            contact: format!("p{id}#0001"),
            game: "Valorant".to_string(),
            note: String::new(),
            avatar_url: None,
            owner_display_name: format!("p{id}"),
        }
    }

    fn session_with(players: i64) -> BrowseSession {
        let mut session = BrowseSession::new();
        session.select_game(
            "Valorant",
            (1..=players).map(player).collect(),
            &mut StdRng::seed_from_u64(5),
        );
        session
    }

    fn rendered(session: &BrowseSession) -> Value {
        serde_json::to_value(render(session, SESSION)).unwrap()
    }

    /// Disabled flags of the Previous and Next buttons, in that order.
    fn nav_flags(value: &Value) -> Vec<bool> {
        let rows = value["data"]["components"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        rows[0]["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|button| button["disabled"].as_bool().unwrap_or(false))
            .collect()
    }

    #[test]
    fn picker_selection_is_only_acknowledged() {
        let value = rendered(&BrowseSession::new());

        assert_eq!(value["type"], 6);
    }

    #[test]
    fn empty_game_renders_terminal_text_without_controls() {
        let value = rendered(&session_with(0));

        assert_eq!(value["data"]["content"], "No players found for Valorant.");
        assert_eq!(value["data"]["components"], serde_json::json!([]));
        assert_eq!(value["data"]["embeds"], serde_json::json!([]));
    }

    #[test]
    fn card_controls_follow_the_cursor() {
        let mut session = session_with(3);

        let first = rendered(&session);
        assert_eq!(nav_flags(&first), vec![true, false]);
        assert_eq!(first["data"]["embeds"][0]["title"], "Player for Valorant");

        session.next_card();
        assert_eq!(nav_flags(&rendered(&session)), vec![false, false]);

        session.next_card();
        assert_eq!(nav_flags(&rendered(&session)), vec![false, true]);
    }

    #[test]
    fn single_player_has_both_controls_disabled() {
        assert_eq!(nav_flags(&rendered(&session_with(1))), vec![true, true]);
    }

    #[test]
    fn nav_buttons_belong_to_the_session() {
        let value = rendered(&session_with(2));
        let buttons = value["data"]["components"][0]["components"].as_array().unwrap();

        assert_eq!(buttons[0]["custom_id"], ids::scoped(ids::PREVIOUS, SESSION));
        assert_eq!(buttons[1]["custom_id"], ids::scoped(ids::NEXT, SESSION));
    }

    #[test]
    fn closed_session_drops_the_card() {
        let mut session = session_with(2);
        session.close();

        let value = rendered(&session);
        assert_eq!(value["data"]["content"], "No more players found for Valorant.");
        assert_eq!(value["data"]["components"], serde_json::json!([]));
    }
}

use poise::serenity_prelude::{
    ActionRow, ActionRowComponent, ButtonStyle, CreateActionRow, CreateButton, CreateInputText,
    CreateModal, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle,
    ReactionType,
};

use super::ids;
use crate::squad::discovery::{BrowseSession, GameCount};
use crate::squad::registration::SignUpForm;

const FIELD_NAME: &str = "name";
const FIELD_CONTACT: &str = "contact";
const FIELD_GAME: &str = "game";
const FIELD_NOTE: &str = "note";

/// Buttons attached to the setup message.
pub fn entry_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::SIGN_UP)
            .label("Sign Up as Player")
            .emoji('📝')
            .style(ButtonStyle::Primary),
        CreateButton::new(ids::FIND_PLAYERS)
            .label("Find Players")
            .emoji('🔍')
            .style(ButtonStyle::Success),
        CreateButton::new(ids::DELETE_DATA)
            .label("Delete My Data")
            .emoji(ReactionType::Unicode("🗑️".to_string()))
            .style(ButtonStyle::Danger),
    ])
}

pub fn deletion_buttons(session: u64) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::scoped(ids::CONFIRM_DELETION, session))
            .label("Confirm Deletion")
            .style(ButtonStyle::Danger),
        CreateButton::new(ids::scoped(ids::CANCEL_DELETION, session))
            .label("Cancel")
            .style(ButtonStyle::Secondary),
    ])
}

pub fn game_picker(session: u64, counts: &[GameCount]) -> CreateActionRow {
    let options = counts
        .iter()
        .map(|count| {
            CreateSelectMenuOption::new(count.game, count.game).description(count.description())
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ids::scoped(ids::GAME_PICKER, session),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Select a game"),
    )
}

pub fn browse_buttons(session_id: u64, session: &BrowseSession) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::scoped(ids::PREVIOUS, session_id))
            .label("Previous")
            .emoji('◀')
            .style(ButtonStyle::Secondary)
            .disabled(!session.can_go_previous()),
        CreateButton::new(ids::scoped(ids::NEXT, session_id))
            .label("Next")
            .emoji('▶')
            .style(ButtonStyle::Primary)
            .disabled(!session.can_go_next()),
    ])
}

pub fn sign_up_modal(custom_id: &str) -> CreateModal {
    CreateModal::new(custom_id, "Sign Up as Player").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Your Name", FIELD_NAME)
                .placeholder("Enter your name")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Contact Info", FIELD_CONTACT)
                .placeholder("Enter your ID or contact method")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Game", FIELD_GAME)
                .placeholder("Enter a game from the list (check /games for full list)")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Paragraph, "Note", FIELD_NOTE)
                .placeholder("Any additional information?")
                .required(false),
        ),
    ])
}

pub fn read_sign_up_form(rows: &[ActionRow]) -> SignUpForm {
    let fields = rows
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => {
                Some((input.custom_id.as_str(), input.value.as_deref()))
            }
            _ => None,
        });
    sign_up_form_from_fields(fields)
}

fn sign_up_form_from_fields<'a>(
    fields: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> SignUpForm {
    let mut form = SignUpForm::default();
    for (custom_id, value) in fields {
        let value = value.unwrap_or_default().to_string();
        match custom_id {
            FIELD_NAME => form.name = value,
            FIELD_CONTACT => form.contact = value,
            FIELD_GAME => form.game = value,
            FIELD_NOTE => form.note = value,
            _ => {}
        }
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_are_mapped_by_custom_id() {
        let form = sign_up_form_from_fields([
            (FIELD_GAME, Some("Fortnite ")),
            (FIELD_NAME, Some("Alex")),
            (FIELD_NOTE, None),
            (FIELD_CONTACT, Some("alex#1234")),
        ]);

        assert_eq!(form.name, "Alex");
        assert_eq!(form.contact, "alex#1234");
        assert_eq!(form.game, "Fortnite ");
        assert_eq!(form.note, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let form = sign_up_form_from_fields([("favourite_colour", Some("green"))]);

        assert!(form.name.is_empty());
        assert!(form.game.is_empty());
    }
}

use tracing::{info, instrument};

use crate::db::{NewPlayer, Repository};
use crate::error::AppError;
use crate::games::canonical_game;

/// Raw values typed into the sign-up form.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub contact: String,
    pub game: String,
    pub note: String,
}

/// Who submitted the form, as Discord knew them at that moment.
#[derive(Debug, Clone)]
pub struct Submitter {
    pub owner_id: u64,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered { name: String, game: &'static str },
    InvalidGame { input: String },
}

impl RegistrationOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Registered { name, .. } => format!("Thanks for signing up, {name}!"),
            Self::InvalidGame { input } => format!("{input} is not a valid game."),
        }
    }
}

/// Validate the form and store the registration when the game is allow-listed.
#[instrument(skip_all, fields(owner_id = submitter.owner_id, game = %form.game.trim()))]
pub async fn register(
    repo: &Repository,
    submitter: &Submitter,
    form: SignUpForm,
) -> Result<RegistrationOutcome, AppError> {
    let Some(game) = canonical_game(&form.game) else {
        info!("Sign-up rejected, unknown game");
        return Ok(RegistrationOutcome::InvalidGame { input: form.game });
    };

    let player = NewPlayer {
        owner_id: submitter.owner_id,
        display_name: form.name,
        contact: form.contact,
        game,
        note: form.note,
        avatar_url: submitter.avatar_url.clone(),
        owner_display_name: submitter.display_name.clone(),
    };
    let id = repo.insert(&player).await?;

    info!(player_id = id, "Player registered");

    Ok(RegistrationOutcome::Registered {
        name: player.display_name,
        game,
    })
}

use poise::serenity_prelude::{CreateEmbed, CreateEmbedAuthor};

use crate::db::Player;
use crate::games::GAMES;

const BLUE: u32 = 0x3498db;
const GREEN: u32 = 0x2ecc71;

pub fn setup_embed(bot_avatar: Option<String>, banner_url: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("SquadSeek")
        .description(
            "Connect with players, find teammates, and discover your next gaming buddy with ease.",
        )
        .color(BLUE)
        .field("Sign Up as Player", "Register as a player for a game.", true)
        .field("Find Players", "Search for players for a specific game.", true)
        .image(banner_url);

    if let Some(avatar) = bot_avatar {
        embed = embed.thumbnail(avatar);
    }
    embed
}

pub fn games_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("Available Games")
        .description(GAMES.join("\n"))
        .color(BLUE)
}

/// Card shown while browsing players of `game`.
pub fn player_card(game: &str, player: &Player) -> CreateEmbed {
    // Rows written before the column existed have no owner name.
    let author_name = if player.owner_display_name.is_empty() {
        &player.display_name
    } else {
        &player.owner_display_name
    };

    let mut author = CreateEmbedAuthor::new(author_name);
    if let Some(avatar) = &player.avatar_url {
        author = author.icon_url(avatar);
    }

    let mut embed = CreateEmbed::new()
        .title(format!("Player for {game}"))
        .color(GREEN)
        .author(author)
        .field("Name:", non_empty(&player.display_name), false)
        .field("ID:", non_empty(&player.contact), false)
        .field("Note:", non_empty(&player.note), false);

    if let Some(avatar) = &player.avatar_url {
        embed = embed.thumbnail(avatar);
    }
    embed
}

/// Discord rejects blank field values.
fn non_empty(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_get_a_placeholder() {
        assert_eq!(non_empty(""), "-");
        assert_eq!(non_empty("  \n"), "-");
        assert_eq!(non_empty("weekends"), "weekends");
    }
}

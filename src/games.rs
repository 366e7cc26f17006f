//! The fixed list of games players can register for.

/// Every game accepted at registration, in display order.
pub const GAMES: [&str; 14] = [
    "Minecraft",
    "Fortnite",
    "Among Us",
    "PUBG",
    "Mobile Legends",
    "Rocket League",
    "Call of Duty: Warzone",
    "Apex Legends",
    "Valorant",
    "Overwatch 2",
    "League of Legends",
    "Fall Guys",
    "Genshin Impact",
    "Roblox",
];

/// Resolve user input to the allow-listed spelling of a game.
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive;
/// anything else has to match exactly.
pub fn canonical_game(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    GAMES
        .iter()
        .copied()
        .find(|game| game.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_and_whitespace() {
        assert_eq!(canonical_game("  minecraft "), Some("Minecraft"));
        assert_eq!(canonical_game("Minecraft"), Some("Minecraft"));
        assert_eq!(canonical_game("VALORANT"), Some("Valorant"));
        assert_eq!(canonical_game("call of duty: warzone"), Some("Call of Duty: Warzone"));
        assert_eq!(canonical_game("\tpubg\n"), Some("PUBG"));
    }

    #[test]
    fn near_misses_are_rejected() {
        assert_eq!(canonical_game("minecraft2"), None);
        assert_eq!(canonical_game("chess"), None);
        assert_eq!(canonical_game("overwatch"), None);
        assert_eq!(canonical_game("Among  Us"), None);
        assert_eq!(canonical_game(""), None);
    }

    #[test]
    fn every_listed_game_resolves_to_itself() {
        for game in GAMES {
            assert_eq!(canonical_game(&game.to_lowercase()), Some(game));
        }
    }
}

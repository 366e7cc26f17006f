//! Browsing registered players one card at a time.
//!
//! A [`BrowseSession`] starts in [`BrowseState::PickingGame`]. Choosing a game
//! loads and shuffles its registrations and moves to
//! [`BrowseState::Browsing`], or straight to [`BrowseState::Exhausted`] when
//! nobody signed up for it. The cursor only ever moves one step at a time and
//! never leaves the loaded list.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::db::{Player, Repository};
use crate::error::AppError;
use crate::games::{GAMES, canonical_game};

/// A picker entry: an allow-listed game and how many registrations it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCount {
    pub game: &'static str,
    pub players: i64,
}

impl GameCount {
    pub fn description(&self) -> String {
        format!("{} player(s) found", self.players)
    }
}

/// Live registration counts for every allow-listed game, in display order.
pub async fn game_counts(repo: &Repository) -> Result<Vec<GameCount>, AppError> {
    let mut counts = Vec::with_capacity(GAMES.len());
    for game in GAMES {
        counts.push(GameCount {
            game,
            players: repo.count_by_game(game).await?,
        });
    }
    Ok(counts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseState {
    PickingGame,
    Browsing,
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    state: BrowseState,
    game: Option<&'static str>,
    players: Vec<Player>,
    cursor: usize,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseSession {
    pub fn new() -> Self {
        Self {
            state: BrowseState::PickingGame,
            game: None,
            players: Vec::new(),
            cursor: 0,
        }
    }

    pub fn state(&self) -> BrowseState {
        self.state
    }

    pub fn game(&self) -> Option<&'static str> {
        self.game
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Start browsing `players` of `game` in a fresh random order.
    ///
    /// Ignored once the session is exhausted.
    pub fn select_game<R: Rng + ?Sized>(
        &mut self,
        game: &'static str,
        mut players: Vec<Player>,
        rng: &mut R,
    ) -> BrowseState {
        if self.state == BrowseState::Exhausted {
            return self.state;
        }

        players.shuffle(rng);
        self.game = Some(game);
        self.players = players;
        self.cursor = 0;
        self.state = if self.players.is_empty() {
            BrowseState::Exhausted
        } else {
            BrowseState::Browsing
        };
        self.state
    }

    /// The card under the cursor while browsing.
    pub fn current(&self) -> Option<&Player> {
        match self.state {
            BrowseState::Browsing => self.players.get(self.cursor),
            _ => None,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.state == BrowseState::Browsing && self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.state == BrowseState::Browsing && self.cursor + 1 < self.players.len()
    }

    /// Step forward. Returns `false` and stays put on the last card.
    pub fn next_card(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Step back. Returns `false` and stays put on the first card.
    pub fn previous_card(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn close(&mut self) {
        self.state = BrowseState::Exhausted;
    }

    /// Text shown once the session can no longer browse.
    pub fn exhausted_message(&self) -> String {
        match (self.game, self.is_empty()) {
            (Some(game), true) => format!("No players found for {game}."),
            (Some(game), false) => format!("No more players found for {game}."),
            (None, _) => "No game selected.".to_string(),
        }
    }
}

/// Load the registrations of a picked game into `session`.
///
/// Values that do not name an allow-listed game leave the session unchanged.
pub async fn pick_game(
    repo: &Repository,
    session: &mut BrowseSession,
    value: &str,
) -> Result<BrowseState, AppError> {
    let Some(game) = canonical_game(value) else {
        debug!(value, "Ignoring unknown game selection");
        return Ok(session.state());
    };

    let players = repo.list_by_game(game).await?;
    debug!(game, found = players.len(), "Loaded players for browsing");

    Ok(session.select_game(game, players, &mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::db::{NewPlayer, memory_pool};

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

    fn browsing(n: i64) -> BrowseSession {
        let mut session = BrowseSession::new();
        let mut rng = StdRng::seed_from_u64(7);
        session.select_game("Valorant", (1..=n).map(player).collect(), &mut rng);
        session
    }

    #[test]
    fn new_session_waits_for_a_game() {
        let session = BrowseSession::new();
        assert_eq!(session.state(), BrowseState::PickingGame);
        assert!(session.current().is_none());
        assert!(!session.can_go_previous());
        assert!(!session.can_go_next());
    }

    #[test]
    fn empty_selection_is_terminal() {
        let mut session = BrowseSession::new();
        let state = session.select_game("Roblox", Vec::new(), &mut StdRng::seed_from_u64(1));

        assert_eq!(state, BrowseState::Exhausted);
        assert!(session.current().is_none());
        assert!(!session.can_go_previous());
        assert!(!session.can_go_next());
        assert_eq!(session.exhausted_message(), "No players found for Roblox.");
    }

    #[test]
    fn controls_are_disabled_exactly_at_the_bounds() {
        for n in 1..=5 {
            let mut session = browsing(n);
            let last = (n - 1) as usize;

            loop {
                assert_eq!(session.can_go_previous(), session.cursor() != 0);
                assert_eq!(session.can_go_next(), session.cursor() != last);
                if !session.next_card() {
                    break;
                }
            }
            assert_eq!(session.cursor(), last);

            while session.previous_card() {
                assert!(session.cursor() <= last);
            }
            assert_eq!(session.cursor(), 0);
        }
    }

    #[test]
    fn stepping_past_either_end_is_a_no_op() {
        let mut session = browsing(2);

        assert!(!session.previous_card());
        assert_eq!(session.cursor(), 0);
        assert!(session.next_card());
        assert!(!session.next_card());
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.state(), BrowseState::Browsing);
    }

    #[test]
    fn every_player_is_visited_once() {
        let mut session = browsing(6);
        let mut seen = vec![session.current().unwrap().id];
        while session.next_card() {
            seen.push(session.current().unwrap().id);
        }
        seen.sort();
        assert_eq!(seen, (1..=6).collect::<Vec<_>>());
    }

    #[test]
    fn reselecting_reshuffles_and_rewinds() {
        let mut session = browsing(8);
        session.next_card();
        session.next_card();

        let mut rng = StdRng::seed_from_u64(99);
        session.select_game("Valorant", (1..=8).map(player).collect(), &mut rng);

        assert_eq!(session.cursor(), 0);
        assert_eq!(session.len(), 8);
        assert_eq!(session.state(), BrowseState::Browsing);
    }

    #[test]
    fn shuffle_changes_order_between_seeds() {
        let order = |seed| {
            let mut session = BrowseSession::new();
            session.select_game(
                "Valorant",
                (1..=20).map(player).collect(),
                &mut StdRng::seed_from_u64(seed),
            );
            let mut ids = vec![session.current().unwrap().id];
            while session.next_card() {
                ids.push(session.current().unwrap().id);
            }
            ids
        };

        assert_ne!(order(1), order(2));
    }

    #[test]
    fn closed_session_stays_closed() {
        let mut session = browsing(3);
        session.close();

        assert_eq!(session.state(), BrowseState::Exhausted);
        assert!(session.current().is_none());
        assert!(!session.next_card());

        let state = session.select_game("Valorant", vec![player(1)], &mut StdRng::seed_from_u64(3));
        assert_eq!(state, BrowseState::Exhausted);
        assert_eq!(session.exhausted_message(), "No more players found for Valorant.");
    }

    #[tokio::test]
    async fn picker_counts_follow_the_store() {
        let repo = Repository::new(memory_pool().await);
        for owner_id in [1, 2] {
            repo.insert(&NewPlayer {
                owner_id,
                display_name: "Sam".to_string(),
                contact: "sam#1".to_string(),
                game: "Apex Legends",
                note: String::new(),
                avatar_url: None,
                owner_display_name: "sam".to_string(),
            })
            .await
            .unwrap();
        }

        let counts = game_counts(&repo).await.unwrap();

        assert_eq!(counts.len(), GAMES.len());
        assert_eq!(counts[0].game, "Minecraft");
        let apex = counts.iter().find(|c| c.game == "Apex Legends").unwrap();
        assert_eq!(apex.players, 2);
        assert_eq!(apex.description(), "2 player(s) found");
        assert_eq!(counts.iter().map(|c| c.players).sum::<i64>(), 2);
    }

    #[tokio::test]
    async fn picking_a_game_without_players_ends_the_session() {
        let repo = Repository::new(memory_pool().await);
        let mut session = BrowseSession::new();

        let state = pick_game(&repo, &mut session, "Genshin Impact").await.unwrap();

        assert_eq!(state, BrowseState::Exhausted);
        assert_eq!(session.exhausted_message(), "No players found for Genshin Impact.");
    }

    #[tokio::test]
    async fn picking_an_unknown_value_changes_nothing() {
        let repo = Repository::new(memory_pool().await);
        let mut session = BrowseSession::new();

        let state = pick_game(&repo, &mut session, "Chess").await.unwrap();

        assert_eq!(state, BrowseState::PickingGame);
        assert_eq!(session.game(), None);
    }

    #[tokio::test]
    async fn store_failure_leaves_the_session_untouched() {
        let pool = memory_pool().await;
        let repo = Repository::new(pool.clone());
        pool.close().await;
        let mut session = BrowseSession::new();

        let result = pick_game(&repo, &mut session, "Valorant").await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(session.state(), BrowseState::PickingGame);
        assert_eq!(session.game(), None);
    }
}

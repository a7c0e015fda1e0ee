//! Hint collaborator interface.
//!
//! The engine only prepares what a hint may be based on; producing the text is
//! left to an external [`HintProvider`]. A [`HintRequest`] is built from the
//! asking player's own [`PlayerView`], so a provider can never learn more than
//! that player could see.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;

use crate::domain::state::TeamKey;
use crate::domain::{Card, GameStatus, PlayerId, PlayerView, Suit};

/// Minimum spacing between two hints for the same player.
pub const HINT_COOLDOWN: Duration = Duration::from_secs(60);

/// Suits with at least this many cards in hand count as strong.
const STRONG_SUIT_LEN: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("hint requested again too soon; retry in {0:?}")]
    CoolingDown(Duration),
    #[error("hints are only available during play")]
    NotPlaying,
    #[error("hint provider failed: {0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub player_id: PlayerId,
    pub hand: Vec<Card>,
    pub suit_counts: BTreeMap<Suit, usize>,
    pub strong_suits: Vec<Suit>,
    /// Trump suit as far as the player knows it.
    pub trump_suit: Option<Suit>,
    pub is_trump_revealed: bool,
    /// Trump cards in hand; `None` while the player does not know trump.
    pub trump_count: Option<usize>,
    pub my_tens: u8,
    pub their_tens: u8,
    pub my_tricks: u8,
    pub their_tricks: u8,
}

impl HintRequest {
    pub fn from_view(view: &PlayerView) -> Result<Self, HintError> {
        if view.status != GameStatus::Playing {
            return Err(HintError::NotPlaying);
        }

        let hand = view.own_hand();
        let mut suit_counts = BTreeMap::new();
        for card in &hand {
            *suit_counts.entry(card.suit).or_insert(0) += 1;
        }
        let strong_suits = suit_counts
            .iter()
            .filter(|(_, n)| **n >= STRONG_SUIT_LEN)
            .map(|(s, _)| *s)
            .collect();
        let trump_count = view
            .trump_suit
            .map(|t| hand.iter().filter(|c| c.suit == t).count());

        let mine = TeamKey::for_seat(view.viewer_seat);
        let (my_team, their_team) = match mine {
            TeamKey::Team1 => (&view.teams.team1, &view.teams.team2),
            TeamKey::Team2 => (&view.teams.team2, &view.teams.team1),
        };

        Ok(Self {
            player_id: view.viewer_id.clone(),
            hand,
            suit_counts,
            strong_suits,
            trump_suit: view.trump_suit,
            is_trump_revealed: view.is_trump_revealed,
            trump_count,
            my_tens: my_team.tens_collected,
            their_tens: their_team.tens_collected,
            my_tricks: my_team.tricks_won,
            their_tricks: their_team.tricks_won,
        })
    }
}

/// Produces hint text for a request. Implemented outside this crate.
pub trait HintProvider: Send + Sync {
    fn hint(&self, request: &HintRequest) -> Result<String, HintError>;
}

/// Per-player hint rate limit.
#[derive(Debug)]
pub struct HintThrottle {
    cooldown: Duration,
    last: DashMap<PlayerId, Instant>,
}

impl Default for HintThrottle {
    fn default() -> Self {
        Self::new(HINT_COOLDOWN)
    }
}

impl HintThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last: DashMap::new(),
        }
    }

    /// Record a hint for `player_id` at `now`, or report how long to wait.
    pub fn check(&self, player_id: &str, now: Instant) -> Result<(), HintError> {
        if let Some(prev) = self.last.get(player_id) {
            let elapsed = now.saturating_duration_since(*prev);
            if elapsed < self.cooldown {
                return Err(HintError::CoolingDown(self.cooldown - elapsed));
            }
        }
        self.last.insert(player_id.to_string(), now);
        Ok(())
    }

    /// Gate and build a request, then ask the provider.
    pub fn request<P: HintProvider + ?Sized>(
        &self,
        provider: &P,
        view: &PlayerView,
        now: Instant,
    ) -> Result<String, HintError> {
        let request = HintRequest::from_view(view)?;
        self.check(&view.viewer_id, now)?;
        provider.hint(&request)
    }
}

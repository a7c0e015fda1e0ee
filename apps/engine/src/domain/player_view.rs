//! Player view of game state - what information is visible to one player.
//!
//! The canonical [`GameState`] holds every card. Before anything is sent to a
//! client it is projected through [`project_for_player`], which replaces every
//! card the viewer may not see with [`ViewCard::Hidden`]. Hidden cards carry
//! neither suit, rank, nor id.
//!
//! Rules applied, in order:
//!
//! - **Calling trump**: every hand is cut to its first-batch cards, including
//!   the viewer's own. The second batch is dealt but not yet visible to anyone.
//! - **Other hands**: replaced by count-equivalent hidden cards.
//! - **Concealed trump**: suit and card are withheld from everyone but the
//!   trump caller until revealed.
//! - **Captured cards**: the opposing team's pile is hidden; the viewer's own
//!   team pile stays visible.
//!
//! Played cards in the current and last trick are public.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{FIRST_BATCH, PLAYERS};
use crate::domain::state::{
    GameState, GameStatus, PlayedCard, PlayerId, RoomId, Seat, TeamKey, TeamState,
};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, CardId, Suit};
use crate::errors::domain::DomainError;

/// A card slot as seen by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "visibility", rename_all = "snake_case")]
pub enum ViewCard {
    Hidden,
    Visible(Card),
}

impl ViewCard {
    pub fn card(&self) -> Option<&Card> {
        match self {
            ViewCard::Hidden => None,
            ViewCard::Visible(card) => Some(card),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, ViewCard::Hidden)
    }
}

/// Team scores with the captured pile filtered for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub players: [PlayerId; 2],
    pub tricks_won: u8,
    pub tens_collected: u8,
    pub won_cards: Vec<ViewCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsView {
    pub team1: TeamView,
    pub team2: TeamView,
}

/// Read-only projection of a match for one seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub room_id: RoomId,
    pub viewer_id: PlayerId,
    pub viewer_seat: Seat,
    pub players: [PlayerId; PLAYERS],
    /// Hands indexed by seat.
    pub hands: [Vec<ViewCard>; PLAYERS],
    pub current_trick: Vec<PlayedCard>,
    pub trump_suit: Option<Suit>,
    pub hidden_trump_card: Option<Card>,
    pub is_trump_revealed: bool,
    pub trump_caller_id: PlayerId,
    pub trump_revealer_id: Option<PlayerId>,
    pub current_turn: PlayerId,
    pub teams: TeamsView,
    pub status: GameStatus,
    pub winner: Option<TeamKey>,
    pub forfeited_by: Option<PlayerId>,
    pub logs: Vec<String>,
    pub last_trick_winner: Option<PlayerId>,
    pub last_trick_cards: Option<Vec<PlayedCard>>,
    /// Ids of the viewer's legal cards when it is their turn to play.
    pub playable: Vec<CardId>,
}

impl PlayerView {
    /// The viewer's own hand as visible cards.
    pub fn own_hand(&self) -> Vec<Card> {
        self.hands[self.viewer_seat as usize]
            .iter()
            .filter_map(|c| c.card().copied())
            .collect()
    }

    pub fn is_my_turn(&self) -> bool {
        self.current_turn == self.viewer_id
    }
}

fn hide_all(cards: &[Card]) -> Vec<ViewCard> {
    vec![ViewCard::Hidden; cards.len()]
}

fn show_all(cards: &[Card]) -> Vec<ViewCard> {
    cards.iter().copied().map(ViewCard::Visible).collect()
}

fn team_view(team: &TeamState, visible: bool) -> TeamView {
    TeamView {
        players: team.players.clone(),
        tricks_won: team.tricks_won,
        tens_collected: team.tens_collected,
        won_cards: if visible {
            show_all(&team.won_cards)
        } else {
            hide_all(&team.won_cards)
        },
    }
}

/// Project the canonical state for `player_id`.
///
/// Never mutates `state`; every card in the result is an owned copy.
pub fn project_for_player(state: &GameState, player_id: &str) -> Result<PlayerView, DomainError> {
    let viewer_seat = state.require_seat(player_id)?;
    let calling = state.status == GameStatus::CallingTrump;

    let hands: [Vec<ViewCard>; PLAYERS] = std::array::from_fn(|i| {
        let hand = &state.hands[i];
        let visible_part = if calling {
            &hand[..hand.len().min(FIRST_BATCH)]
        } else {
            &hand[..]
        };
        if i == viewer_seat as usize {
            show_all(visible_part)
        } else {
            hide_all(visible_part)
        }
    });

    let sees_trump = state.is_trump_revealed || state.trump_caller_id == player_id;
    let (trump_suit, hidden_trump_card) = if sees_trump {
        (state.trump_suit, state.hidden_trump_card)
    } else {
        (None, None)
    };

    let my_team = TeamKey::for_seat(viewer_seat);
    let teams = TeamsView {
        team1: team_view(&state.teams.team1, my_team == TeamKey::Team1),
        team2: team_view(&state.teams.team2, my_team == TeamKey::Team2),
    };

    let playable = if state.current_turn == player_id {
        legal_moves(state, player_id)
            .into_iter()
            .map(|c| c.id)
            .collect()
    } else {
        Vec::new()
    };

    Ok(PlayerView {
        room_id: state.room_id.clone(),
        viewer_id: player_id.to_string(),
        viewer_seat,
        players: state.players.clone(),
        hands,
        current_trick: state.current_trick.clone(),
        trump_suit,
        hidden_trump_card,
        is_trump_revealed: state.is_trump_revealed,
        trump_caller_id: state.trump_caller_id.clone(),
        trump_revealer_id: state.trump_revealer_id.clone(),
        current_turn: state.current_turn.clone(),
        teams,
        status: state.status,
        winner: state.winner,
        forfeited_by: state.forfeited_by.clone(),
        logs: state.logs.clone(),
        last_trick_winner: state.last_trick_winner.clone(),
        last_trick_cards: state.last_trick_cards.clone(),
        playable,
    })
}

/// Projections for every seated player, in seat order.
pub fn project_all(state: &GameState) -> Vec<PlayerView> {
    state
        .players
        .iter()
        .filter_map(|p| project_for_player(state, p).ok())
        .collect()
}

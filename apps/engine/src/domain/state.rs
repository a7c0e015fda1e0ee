use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::{Card, CardId, Suit};
use crate::errors::domain::DomainError;

pub type PlayerId = String;
pub type RoomId = String;
pub type Seat = u8; // 0..=3, index into `players` and `hands`

/// Match progression. Linear: a rematch starts a fresh `GameState`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Deck being dealt; never observable once `initialize_game` returns.
    Dealing,
    /// Trump caller picks the hidden trump card.
    CallingTrump,
    /// Tricks being played.
    Playing,
    /// All 13 tricks resolved, or a player forfeited.
    Finished,
}

impl GameStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Dealing => "dealing",
            GameStatus::CallingTrump => "calling_trump",
            GameStatus::Playing => "playing",
            GameStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed partnerships: seats 0 and 2 are team1, seats 1 and 3 are team2.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKey {
    Team1,
    Team2,
}

impl TeamKey {
    pub const fn for_seat(seat: Seat) -> Self {
        if seat % 2 == 0 {
            TeamKey::Team1
        } else {
            TeamKey::Team2
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            TeamKey::Team1 => TeamKey::Team2,
            TeamKey::Team2 => TeamKey::Team1,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            TeamKey::Team1 => [0, 2],
            TeamKey::Team2 => [1, 3],
        }
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamKey::Team1 => f.write_str("team1"),
            TeamKey::Team2 => f.write_str("team2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamState {
    pub players: [PlayerId; 2],
    pub tricks_won: u8,
    pub tens_collected: u8,
    /// Every card captured in tricks this team won. Order carries no meaning.
    pub won_cards: Vec<Card>,
}

impl TeamState {
    pub fn new(players: [PlayerId; 2]) -> Self {
        Self {
            players,
            tricks_won: 0,
            tens_collected: 0,
            won_cards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub team1: TeamState,
    pub team2: TeamState,
}

impl Teams {
    pub fn get(&self, key: TeamKey) -> &TeamState {
        match key {
            TeamKey::Team1 => &self.team1,
            TeamKey::Team2 => &self.team2,
        }
    }

    pub fn get_mut(&mut self, key: TeamKey) -> &mut TeamState {
        match key {
            TeamKey::Team1 => &mut self.team1,
            TeamKey::Team2 => &mut self.team2,
        }
    }

    pub fn total_tricks(&self) -> u8 {
        self.team1.tricks_won + self.team2.tricks_won
    }

    pub fn total_tens(&self) -> u8 {
        self.team1.tens_collected + self.team2.tens_collected
    }
}

/// One entry of a trick in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedCard {
    pub player_id: PlayerId,
    pub card: Card,
}

/// Canonical state of one match. Owned by the transport layer, one per room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub room_id: RoomId,
    /// Seating and turn order.
    pub players: [PlayerId; PLAYERS],
    /// Hands indexed by seat, in dealing order (first batch first).
    pub hands: [Vec<Card>; PLAYERS],
    pub current_trick: Vec<PlayedCard>,
    pub trump_suit: Option<Suit>,
    /// The designated trump card. It stays in the caller's hand.
    pub hidden_trump_card: Option<Card>,
    pub is_trump_revealed: bool,
    pub trump_caller_id: PlayerId,
    pub trump_revealer_id: Option<PlayerId>,
    pub current_turn: PlayerId,
    pub teams: Teams,
    pub status: GameStatus,
    pub winner: Option<TeamKey>,
    pub forfeited_by: Option<PlayerId>,
    /// Append-only, human-readable event trail.
    pub logs: Vec<String>,
    pub last_trick_winner: Option<PlayerId>,
    pub last_trick_cards: Option<Vec<PlayedCard>>,
}

impl GameState {
    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p == player_id)
            .map(|i| i as Seat)
    }

    pub fn require_seat(&self, player_id: &str) -> Result<Seat, DomainError> {
        self.seat_of(player_id)
            .ok_or_else(|| DomainError::unknown_player(player_id))
    }

    pub fn player_at(&self, seat: Seat) -> &PlayerId {
        &self.players[seat as usize]
    }

    pub fn hand_of(&self, seat: Seat) -> &[Card] {
        &self.hands[seat as usize]
    }

    pub fn team_of(&self, player_id: &str) -> Option<TeamKey> {
        self.seat_of(player_id).map(TeamKey::for_seat)
    }

    pub fn current_turn_seat(&self) -> Option<Seat> {
        self.seat_of(&self.current_turn)
    }

    /// Suit of the first card in the current trick, if any card is down.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_trick.first().map(|p| p.card.suit)
    }

    /// Id of the designated trump card while it is still concealed.
    pub fn concealed_trump_id(&self) -> Option<CardId> {
        match (&self.hidden_trump_card, self.is_trump_revealed) {
            (Some(card), false) => Some(card.id),
            _ => None,
        }
    }

    /// Trump suit with power in trick resolution: only once revealed.
    pub fn active_trump(&self) -> Option<Suit> {
        if self.is_trump_revealed {
            self.trump_suit
        } else {
            None
        }
    }

    /// Cards held, on the table, or captured. Always the full deck.
    pub fn cards_in_play(&self) -> usize {
        self.hands.iter().map(Vec::len).sum::<usize>()
            + self.current_trick.len()
            + self.teams.team1.won_cards.len()
            + self.teams.team2.won_cards.len()
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub(crate) fn log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Seat across the table.
#[inline]
pub fn partner_seat(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

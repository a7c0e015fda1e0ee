//! Deck construction, shuffling, and match setup.

use rand::Rng;

use crate::domain::rules::{DECK_SIZE, FIRST_BATCH, PLAYERS, SECOND_BATCH};
use crate::domain::state::{
    GameState, GameStatus, PlayerId, RoomId, Seat, TeamKey, TeamState, Teams,
};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// A full 52-card deck in standard order, with fresh card ids.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<R: Rng>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Picks the trump caller. After a finished match the caller comes from the
/// winning team; otherwise any seat is equally likely.
pub fn choose_trump_caller<R: Rng>(previous_winner: Option<TeamKey>, rng: &mut R) -> Seat {
    match previous_winner {
        Some(team) => team.seats()[rng.random_range(0..2)],
        None => rng.random_range(0..PLAYERS) as Seat,
    }
}

/// Create a match: seat the players, choose the trump caller, and deal.
///
/// Seats 0 and 2 form team1, seats 1 and 3 form team2. The returned state is
/// in `calling_trump` with the turn on the trump caller.
pub fn initialize_game<R, I, S>(
    room_id: impl Into<RoomId>,
    player_ids: I,
    previous_winner: Option<TeamKey>,
    rng: &mut R,
) -> Result<GameState, DomainError>
where
    R: Rng,
    I: IntoIterator<Item = S>,
    S: Into<PlayerId>,
{
    let ids: Vec<PlayerId> = player_ids.into_iter().map(Into::into).collect();
    let players: [PlayerId; PLAYERS] = ids
        .try_into()
        .map_err(|ids: Vec<PlayerId>| DomainError::InvalidPlayerCount(ids.len()))?;
    for (i, id) in players.iter().enumerate() {
        if players[..i].contains(id) {
            return Err(DomainError::DuplicatePlayer(id.clone()));
        }
    }

    let caller_seat = choose_trump_caller(previous_winner, rng);
    let trump_caller_id = players[caller_seat as usize].clone();

    let teams = Teams {
        team1: TeamState::new([players[0].clone(), players[2].clone()]),
        team2: TeamState::new([players[1].clone(), players[3].clone()]),
    };

    let mut state = GameState {
        room_id: room_id.into(),
        players,
        hands: Default::default(),
        current_trick: Vec::with_capacity(PLAYERS),
        trump_suit: None,
        hidden_trump_card: None,
        is_trump_revealed: false,
        trump_caller_id: trump_caller_id.clone(),
        trump_revealer_id: None,
        current_turn: trump_caller_id.clone(),
        teams,
        status: GameStatus::Dealing,
        winner: None,
        forfeited_by: None,
        logs: vec![format!(
            "Game initialized. {trump_caller_id} will call trump."
        )],
        last_trick_winner: None,
        last_trick_cards: None,
    };

    let mut deck = create_deck();
    shuffle(&mut deck, rng);
    deal(&mut state, deck);
    state.status = GameStatus::CallingTrump;

    Ok(state)
}

/// Deal 5 cards to every seat, then 8 more, so each hand's first five entries
/// are the first batch.
fn deal(state: &mut GameState, deck: Vec<Card>) {
    debug_assert_eq!(deck.len(), DECK_SIZE);
    let mut cards = deck.into_iter();
    for batch in [FIRST_BATCH, SECOND_BATCH] {
        for hand in state.hands.iter_mut() {
            hand.extend(cards.by_ref().take(batch));
        }
    }
}

use crate::domain::rules::{PLAYERS, TOTAL_TRICKS};
use crate::domain::scoring::{award_trick, decide_winner};
use crate::domain::state::{next_seat, GameState, GameStatus, PlayedCard, PlayerId, TeamKey};
use crate::domain::trump::reveal_trump;
use crate::domain::{card_beats, Card, CardId, Suit};
use crate::errors::domain::DomainError;

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    pub card: Card,
    /// Whether this play revealed the hidden trump.
    pub trump_revealed: bool,
    /// Set when this play completed a trick.
    pub trick: Option<TrickResult>,
    /// Whether the match finished as a result of this play.
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    pub winner: PlayerId,
    pub team: TeamKey,
    pub tens: u8,
}

/// Cards of `hand` that may be offered at all: the concealed trump is held
/// back unless it is the only card left.
fn offerable(hand: &[Card], concealed: Option<CardId>) -> impl Iterator<Item = &Card> {
    let last_card = hand.len() == 1;
    hand.iter()
        .filter(move |c| last_card || Some(c.id) != concealed)
}

/// Whether the hand holds an offerable card of `suit`.
fn can_follow(hand: &[Card], suit: Suit, concealed: Option<CardId>) -> bool {
    offerable(hand, concealed).any(|c| c.suit == suit)
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &GameState, player_id: &str) -> Vec<Card> {
    if state.status != GameStatus::Playing {
        return Vec::new();
    }
    let Some(seat) = state.seat_of(player_id) else {
        return Vec::new();
    };

    let hand = state.hand_of(seat);
    let concealed = state.concealed_trump_id();

    if let Some(lead) = state.lead_suit() {
        if can_follow(hand, lead, concealed) {
            return offerable(hand, concealed)
                .filter(|c| c.suit == lead)
                .copied()
                .collect();
        }
    }

    offerable(hand, concealed).copied().collect()
}

/// Play a card into the current trick, enforcing phase, turn, the concealed
/// trump, and suit-following. Nothing is mutated unless every check passes.
pub fn play_card(
    state: &mut GameState,
    player_id: &str,
    card_id: CardId,
) -> Result<PlayCardResult, DomainError> {
    if state.status != GameStatus::Playing {
        return Err(DomainError::phase(GameStatus::Playing, state.status));
    }

    if state.current_turn != player_id {
        return Err(DomainError::NotYourTurn);
    }
    let seat = state.require_seat(player_id)?;
    let hand = state.hand_of(seat);
    let concealed = state.concealed_trump_id();

    if concealed == Some(card_id) && hand.len() > 1 {
        return Err(DomainError::TrumpNotRevealed);
    }

    let Some(pos) = hand.iter().position(|c| c.id == card_id) else {
        return Err(DomainError::CardNotInHand);
    };
    let card = hand[pos];

    let lead = state.lead_suit();
    if let Some(lead) = lead {
        if card.suit != lead && can_follow(hand, lead, concealed) {
            return Err(DomainError::MustFollowSuit(lead));
        }
    }

    // All checks passed; apply.
    state.hands[seat as usize].remove(pos);
    state.current_trick.push(PlayedCard {
        player_id: player_id.to_string(),
        card,
    });

    let mut trump_revealed = false;
    if concealed == Some(card.id) {
        // Last card in hand was the concealed trump.
        trump_revealed |= reveal_trump(state, Some(player_id));
    }
    if let Some(lead) = lead {
        if card.suit != lead && !state.is_trump_revealed {
            trump_revealed |= reveal_trump(state, Some(player_id));
        }
    }

    state.current_turn = state.player_at(next_seat(seat)).clone();

    let trick = if state.current_trick.len() == PLAYERS {
        Some(resolve_trick(state))
    } else {
        None
    };

    Ok(PlayCardResult {
        card,
        trump_revealed,
        trick,
        finished: state.is_finished(),
    })
}

/// Index of the winning play: highest revealed trump, otherwise highest card
/// of the lead suit. Returns `None` for an empty trick.
pub fn trick_winner_index(plays: &[PlayedCard], trump: Option<Suit>) -> Option<usize> {
    let lead = plays.first()?.card.suit;
    let mut best = 0usize;
    for (i, play) in plays.iter().enumerate().skip(1) {
        if card_beats(play.card, plays[best].card, lead, trump) {
            best = i;
        }
    }
    Some(best)
}

/// Resolve the four-card trick on the table.
///
/// Credits the winning team, records the trick for replay, hands the lead to
/// the winner, and finishes the match after the last trick.
pub(crate) fn resolve_trick(state: &mut GameState) -> TrickResult {
    debug_assert_eq!(state.current_trick.len(), PLAYERS);

    let plays = std::mem::take(&mut state.current_trick);
    let best = trick_winner_index(&plays, state.active_trump()).unwrap_or(0);
    let winner = plays[best].player_id.clone();
    let team = state.team_of(&winner).unwrap_or(TeamKey::Team1);

    let cards: Vec<Card> = plays.iter().map(|p| p.card).collect();
    let tens = award_trick(&mut state.teams, team, &cards);

    state.log(format!("{winner} won the trick."));
    state.last_trick_winner = Some(winner.clone());
    state.last_trick_cards = Some(plays);
    state.current_turn = winner.clone();

    if state.teams.total_tricks() == TOTAL_TRICKS {
        let match_winner = decide_winner(&state.teams);
        state.status = GameStatus::Finished;
        state.winner = Some(match_winner);
        state.log(format!("Game finished. Winner: {match_winner}"));
    }

    TrickResult { winner, team, tens }
}

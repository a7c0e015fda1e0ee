//! Blind trump designation and reveal.

use crate::domain::rules::FIRST_BATCH;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::CardId;
use crate::errors::domain::DomainError;

/// Designate the hidden trump card.
///
/// The card must be one of the trump caller's first-batch cards. It stays in
/// the caller's hand; its suit becomes trump but has no power until revealed.
/// The caller keeps the turn and leads the first trick.
pub fn set_trump(state: &mut GameState, card_id: CardId) -> Result<(), DomainError> {
    if state.status != GameStatus::CallingTrump {
        return Err(DomainError::phase(GameStatus::CallingTrump, state.status));
    }

    let seat = state.require_seat(&state.trump_caller_id)?;
    let card = state
        .hand_of(seat)
        .iter()
        .take(FIRST_BATCH)
        .find(|c| c.id == card_id)
        .copied()
        .ok_or(DomainError::CardNotInHand)?;

    state.trump_suit = Some(card.suit);
    state.hidden_trump_card = Some(card);
    state.is_trump_revealed = false;
    state.status = GameStatus::Playing;
    state.log("Trump card selected (hidden).");
    Ok(())
}

/// Reveal the hidden trump. Returns whether anything changed.
///
/// No-op when trump is already revealed or was never designated, and
/// outside `playing`.
pub fn reveal_trump(state: &mut GameState, revealer: Option<&str>) -> bool {
    let Some(card) = state.hidden_trump_card else {
        return false;
    };
    if state.is_trump_revealed || state.status != GameStatus::Playing {
        return false;
    }

    state.is_trump_revealed = true;
    state.trump_revealer_id = revealer.map(str::to_string);
    state.log(format!(
        "Trump revealed! It is {} ({}).",
        card.suit, card.rank
    ));
    true
}

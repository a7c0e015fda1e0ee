//! Inbound actions and the pure `apply` entry point.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::fallback::{forfeit, play_random_card};
use crate::domain::state::{GameState, GameStatus, PlayerId};
use crate::domain::tricks::play_card;
use crate::domain::trump::{reveal_trump, set_trump};
use crate::domain::CardId;
use crate::errors::domain::DomainError;

/// A state-changing request arriving from the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    SetTrump { player_id: PlayerId, card_id: CardId },
    RevealTrump { player_id: PlayerId },
    PlayCard { player_id: PlayerId, card_id: CardId },
    /// Timeout fallback for the seat to act.
    PlayRandomCard { player_id: PlayerId },
    Forfeit { player_id: PlayerId },
}

impl GameAction {
    pub fn player_id(&self) -> &str {
        match self {
            GameAction::SetTrump { player_id, .. }
            | GameAction::RevealTrump { player_id }
            | GameAction::PlayCard { player_id, .. }
            | GameAction::PlayRandomCard { player_id }
            | GameAction::Forfeit { player_id } => player_id,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            GameAction::SetTrump { .. } => "set_trump",
            GameAction::RevealTrump { .. } => "reveal_trump",
            GameAction::PlayCard { .. } => "play_card",
            GameAction::PlayRandomCard { .. } => "play_random_card",
            GameAction::Forfeit { .. } => "forfeit",
        }
    }
}

/// Apply `action` in place. On error the state is unchanged.
pub fn apply_in_place<R: Rng>(
    state: &mut GameState,
    action: &GameAction,
    rng: &mut R,
) -> Result<(), DomainError> {
    match action {
        GameAction::SetTrump { player_id, card_id } => {
            state.require_seat(player_id)?;
            if *player_id != state.trump_caller_id {
                return Err(DomainError::NotYourTurn);
            }
            set_trump(state, *card_id)
        }
        GameAction::RevealTrump { player_id } => {
            state.require_seat(player_id)?;
            if state.status != GameStatus::Playing {
                return Err(DomainError::phase(GameStatus::Playing, state.status));
            }
            reveal_trump(state, Some(player_id));
            Ok(())
        }
        GameAction::PlayCard { player_id, card_id } => {
            play_card(state, player_id, *card_id).map(|_| ())
        }
        GameAction::PlayRandomCard { player_id } => {
            play_random_card(state, player_id, rng).map(|_| ())
        }
        GameAction::Forfeit { player_id } => forfeit(state, player_id),
    }
}

/// Apply `action` to a copy of `state` and return the new state.
pub fn apply<R: Rng>(
    state: &GameState,
    action: &GameAction,
    rng: &mut R,
) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    apply_in_place(&mut next, action, rng)?;
    Ok(next)
}

//! Domain-level error type for rejected game actions.
//!
//! Every variant describes a single rejected action. The engine never applies
//! part of an action: when one of these is returned the state is unchanged.
//! Callers that need a client-facing code use [`DomainError::code`].

use thiserror::Error;

use crate::domain::state::GameStatus;
use crate::domain::Suit;
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("game requires exactly 4 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("phase mismatch: expected {expected}, game is {actual}")]
    InvalidPhase {
        expected: GameStatus,
        actual: GameStatus,
    },
    #[error("player {0} is seated more than once")]
    DuplicatePlayer(String),
    #[error("not your turn")]
    NotYourTurn,
    #[error("card not in hand")]
    CardNotInHand,
    #[error("cannot play the hidden trump card until it is revealed")]
    TrumpNotRevealed,
    #[error("must follow suit: {0}")]
    MustFollowSuit(Suit),
    #[error("player {0} is not seated at this table")]
    UnknownPlayer(String),
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn phase(expected: GameStatus, actual: GameStatus) -> Self {
        Self::InvalidPhase { expected, actual }
    }

    pub fn unknown_player(player_id: impl Into<String>) -> Self {
        Self::UnknownPlayer(player_id.into())
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidPlayerCount(_) => ErrorCode::InvalidPlayerCount,
            DomainError::DuplicatePlayer(_) => ErrorCode::DuplicatePlayer,
            DomainError::InvalidPhase { .. } => ErrorCode::PhaseMismatch,
            DomainError::NotYourTurn => ErrorCode::OutOfTurn,
            DomainError::CardNotInHand => ErrorCode::CardNotInHand,
            DomainError::TrumpNotRevealed => ErrorCode::TrumpNotRevealed,
            DomainError::MustFollowSuit(_) => ErrorCode::MustFollowSuit,
            DomainError::UnknownPlayer(_) => ErrorCode::UnknownPlayer,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
        }
    }
}

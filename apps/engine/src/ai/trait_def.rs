//! AI player trait definition.

use std::fmt;

use crate::domain::{CardId, PlayerView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// The view offers nothing to choose from.
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// A bot occupying one seat.
///
/// Both methods receive the bot's own projection and return the id of the
/// card to submit; the engine still validates the resulting action.
pub trait AiPlayer: Send + Sync {
    /// Pick the hidden trump card while calling trump.
    fn choose_trump(&self, view: &PlayerView) -> Result<CardId, AiError>;

    /// Pick a card to play on the bot's turn.
    fn choose_play(&self, view: &PlayerView) -> Result<CardId, AiError>;
}

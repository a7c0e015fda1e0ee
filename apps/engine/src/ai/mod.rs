//! Automated seat players.
//!
//! Bots decide from a [`PlayerView`](crate::domain::PlayerView) only, so they
//! never see more than a human in the same seat would.

mod random;
mod trait_def;

pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Build a bot by name. Returns `None` for unknown names.
pub fn create_ai(ai_type: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}

//! Random AI player - makes random legal moves.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{CardId, GameStatus, PlayerView};

/// AI that chooses uniformly among the cards its view allows.
///
/// Seeded players are reproducible; `None` seeds from the OS.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, options: &[CardId], what: &str) -> Result<CardId, AiError> {
        let mut rng = self.rng.lock();
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove(format!("no {what} available")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_trump(&self, view: &PlayerView) -> Result<CardId, AiError> {
        if view.status != GameStatus::CallingTrump || view.trump_caller_id != view.viewer_id {
            return Err(AiError::InvalidMove("not calling trump".into()));
        }
        // Only the first batch is visible while calling.
        let options: Vec<CardId> = view.own_hand().iter().map(|c| c.id).collect();
        self.pick(&options, "trump candidates")
    }

    fn choose_play(&self, view: &PlayerView) -> Result<CardId, AiError> {
        self.pick(&view.playable, "legal plays")
    }
}

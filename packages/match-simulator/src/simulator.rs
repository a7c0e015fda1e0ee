//! In-memory match driver.

use court_piece::ai::AiPlayer;
use court_piece::domain::{
    apply_in_place, initialize_game, project_for_player, GameAction, GameState, Suit, TeamKey,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::debug;

const PLAYERS: [&str; 4] = ["north", "east", "south", "west"];

/// Outcome of one simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub game: u32,
    pub seed: u64,
    pub winner: TeamKey,
    pub trump_caller: String,
    pub trump_suit: Option<Suit>,
    pub trump_revealed_by: Option<String>,
    /// Tens collected by team1 and team2.
    pub tens: [u8; 2],
    /// Tricks won by team1 and team2.
    pub tricks: [u8; 2],
    /// Turns handed to the timeout fallback instead of the bot.
    pub timeouts: u32,
}

pub struct Simulator {
    game: u32,
    seed: u64,
    timeout_rate: f64,
}

impl Simulator {
    pub fn new(game: u32, seed: u64, timeout_rate: f64) -> Self {
        Self {
            game,
            seed,
            timeout_rate,
        }
    }

    pub fn simulate_game(&self, ai: &dyn AiPlayer) -> Result<GameResult, String> {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        let mut state = initialize_game(format!("sim-{}", self.game), PLAYERS, None, &mut rng)
            .map_err(|e| e.to_string())?;

        let caller = state.trump_caller_id.clone();
        let view = project_for_player(&state, &caller).map_err(|e| e.to_string())?;
        let card_id = ai.choose_trump(&view).map_err(|e| e.to_string())?;
        step(
            &mut state,
            &GameAction::SetTrump {
                player_id: caller,
                card_id,
            },
            &mut rng,
        )?;

        let mut timeouts = 0;
        while !state.is_finished() {
            let player_id = state.current_turn.clone();
            let action = if rng.random_bool(self.timeout_rate) {
                timeouts += 1;
                GameAction::PlayRandomCard { player_id }
            } else {
                let view = project_for_player(&state, &player_id).map_err(|e| e.to_string())?;
                let card_id = ai.choose_play(&view).map_err(|e| e.to_string())?;
                GameAction::PlayCard { player_id, card_id }
            };
            step(&mut state, &action, &mut rng)?;
        }

        let winner = state
            .winner
            .ok_or_else(|| "finished match has no winner".to_string())?;
        Ok(GameResult {
            game: self.game,
            seed: self.seed,
            winner,
            trump_caller: state.trump_caller_id.clone(),
            trump_suit: state.trump_suit,
            trump_revealed_by: state.trump_revealer_id.clone(),
            tens: [
                state.teams.team1.tens_collected,
                state.teams.team2.tens_collected,
            ],
            tricks: [state.teams.team1.tricks_won, state.teams.team2.tricks_won],
            timeouts,
        })
    }
}

fn step(state: &mut GameState, action: &GameAction, rng: &mut ChaCha20Rng) -> Result<(), String> {
    apply_in_place(state, action, rng)
        .map_err(|e| format!("{} by {} rejected: {e}", action.name(), action.player_id()))?;
    debug!(
        action = action.name(),
        player = action.player_id(),
        "applied"
    );
    Ok(())
}

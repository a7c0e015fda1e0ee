//! Moves the engine makes on a player's behalf: the timeout fallback play and
//! forfeit.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::state::{GameState, GameStatus};
use crate::domain::tricks::{legal_moves, play_card, PlayCardResult};
use crate::errors::domain::DomainError;

/// Play a uniformly random legal card for `player_id`.
///
/// Used by the external turn clock when the acting player runs out of time.
/// Returns `Ok(None)` and leaves the state untouched when the game is not in
/// play, it is not that player's turn, or they hold no playable card.
pub fn play_random_card<R: Rng>(
    state: &mut GameState,
    player_id: &str,
    rng: &mut R,
) -> Result<Option<PlayCardResult>, DomainError> {
    if state.status != GameStatus::Playing || state.current_turn != player_id {
        return Ok(None);
    }

    let legal = legal_moves(state, player_id);
    let Some(card) = legal.choose(rng) else {
        return Ok(None);
    };

    play_card(state, player_id, card.id).map(Some)
}

/// End the match immediately in favour of the forfeiting player's opponents.
pub fn forfeit(state: &mut GameState, player_id: &str) -> Result<(), DomainError> {
    if state.status != GameStatus::Playing {
        return Err(DomainError::phase(GameStatus::Playing, state.status));
    }
    let team = state
        .team_of(player_id)
        .ok_or_else(|| DomainError::unknown_player(player_id))?;

    let winner = team.opponent();
    state.status = GameStatus::Finished;
    state.winner = Some(winner);
    state.forfeited_by = Some(player_id.to_string());
    state.log(format!("{player_id} forfeited. Winner: {winner}"));
    Ok(())
}

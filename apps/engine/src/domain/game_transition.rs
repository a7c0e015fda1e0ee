//! Edge-triggered transitions between two consecutive states of one match.
//!
//! The transport layer uses these to reset its turn clock and to drive
//! animations without diffing states itself.

use crate::domain::state::{GameState, GameStatus, PlayerId, TeamKey};
use crate::domain::Suit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// The turn moved to a different player, or a new phase started with one.
    TurnBecame { player_id: PlayerId },
    /// Calling finished; play starts.
    TrumpCalled,
    /// The trump suit became public.
    TrumpRevealed { suit: Suit },
    /// A trick was resolved.
    TrickCompleted { winner: PlayerId },
    /// The match reached `finished`.
    GameFinished { winner: TeamKey },
}

/// Derive transitions from before/after state.
pub fn derive_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if before.status == GameStatus::CallingTrump && after.status == GameStatus::Playing {
        transitions.push(GameTransition::TrumpCalled);
    }

    if !before.is_trump_revealed && after.is_trump_revealed {
        if let Some(suit) = after.trump_suit {
            transitions.push(GameTransition::TrumpRevealed { suit });
        }
    }

    let before_tricks = before.teams.total_tricks();
    let after_tricks = after.teams.total_tricks();
    if after_tricks > before_tricks {
        if let Some(winner) = &after.last_trick_winner {
            transitions.push(GameTransition::TrickCompleted {
                winner: winner.clone(),
            });
        }
    }

    if !before.is_finished() {
        if let (true, Some(winner)) = (after.is_finished(), after.winner) {
            transitions.push(GameTransition::GameFinished { winner });
            return transitions;
        }
    }

    // A trick winner who also played the last card keeps the turn; that
    // still counts as a new turn.
    let new_turn = before.current_turn != after.current_turn
        || after_tricks > before_tricks
        || transitions.contains(&GameTransition::TrumpCalled);
    if new_turn && !after.is_finished() {
        transitions.push(GameTransition::TurnBecame {
            player_id: after.current_turn.clone(),
        });
    }

    transitions
}

//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod fallback;
pub mod game_transition;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use actions::{apply, apply_in_place, GameAction};
pub use cards_logic::{card_beats, count_tens, hand_has_suit};
pub use cards_types::{Card, CardId, Rank, Suit};
pub use dealing::{create_deck, initialize_game, shuffle};
pub use fallback::{forfeit, play_random_card};
pub use game_transition::{derive_transitions, GameTransition};
pub use player_view::{project_all, project_for_player, PlayerView, ViewCard};
pub use state::{GameState, GameStatus, PlayedCard, PlayerId, RoomId, Seat, TeamKey};
pub use tricks::{legal_moves, play_card, PlayCardResult, TrickResult};
pub use trump::{reveal_trump, set_trump};

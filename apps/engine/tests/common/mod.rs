#![allow(dead_code)]

use court_piece::domain::{GameAction, GameState, PlayerView};
use court_piece::{EngineConfig, MatchRegistry};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const ROOM: &str = "room-1";
pub const PLAYERS: [&str; 4] = ["north", "east", "south", "west"];

/// Registry with a fixed seed so dealing is reproducible.
pub fn seeded_registry(seed: u64) -> MatchRegistry {
    MatchRegistry::new(&EngineConfig::default().with_seed(seed))
}

/// Set trump with the caller's first visible card.
pub fn call_first_card(registry: &MatchRegistry, room: &str) -> GameState {
    let state = registry.state(room).expect("room exists");
    let caller = state.trump_caller_id.clone();
    let view = registry.view_for(room, &caller).expect("caller is seated");
    let card_id = view.own_hand()[0].id;
    registry
        .apply(
            room,
            &GameAction::SetTrump {
                player_id: caller,
                card_id,
            },
        )
        .expect("caller may set trump")
        .state
}

/// The first playable card for whoever is on turn, as a play action.
pub fn first_playable(view: &PlayerView) -> GameAction {
    GameAction::PlayCard {
        player_id: view.viewer_id.clone(),
        card_id: view.playable[0],
    }
}

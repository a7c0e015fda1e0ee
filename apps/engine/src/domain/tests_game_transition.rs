use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::state::{GameState, GameStatus, TeamKey};
use crate::domain::test_state_helpers::{card_id, hands, player, playing_state};
use crate::domain::{apply, derive_transitions, initialize_game, GameAction, GameTransition, Suit};
use crate::errors::domain::DomainError;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(42)
}

fn table() -> GameState {
    let mut state = playing_state(
        hands([&["KS", "2C"], &["3H", "4D"], &["AS", "QH", "5C"], &["7H", "8D"]]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    state
}

fn play(state: &GameState, seat: u8, token: &str) -> GameState {
    let action = GameAction::PlayCard {
        player_id: player(seat).to_string(),
        card_id: card_id(state, seat, token),
    };
    apply(state, &action, &mut rng()).unwrap()
}

#[test]
fn set_trump_emits_trump_called_and_turn() {
    let state = initialize_game("r1", ["a", "b", "c", "d"], None, &mut rng()).unwrap();
    let caller = state.trump_caller_id.clone();
    let seat = state.seat_of(&caller).unwrap();
    let action = GameAction::SetTrump {
        player_id: caller.clone(),
        card_id: state.hand_of(seat)[0].id,
    };
    let next = apply(&state, &action, &mut rng()).unwrap();

    assert_eq!(
        derive_transitions(&state, &next),
        vec![
            GameTransition::TrumpCalled,
            GameTransition::TurnBecame { player_id: caller }
        ]
    );
    assert_eq!(state.status, GameStatus::CallingTrump);
}

#[test]
fn suit_break_emits_reveal() {
    let s0 = table();
    let s1 = play(&s0, 0, "KS");
    assert_eq!(
        derive_transitions(&s0, &s1),
        vec![GameTransition::TurnBecame {
            player_id: "p2".to_string()
        }]
    );

    let s2 = play(&s1, 1, "3H");
    assert_eq!(
        derive_transitions(&s1, &s2),
        vec![
            GameTransition::TrumpRevealed { suit: Suit::Hearts },
            GameTransition::TurnBecame {
                player_id: "p3".to_string()
            }
        ]
    );
}

#[test]
fn trick_completion_emits_winner_even_when_turn_stays() {
    let s = table();
    let s = play(&s, 0, "KS");
    let s = play(&s, 1, "3H");
    let s = play(&s, 2, "AS");
    // p4 plays last and wins: the turn "stays" with p4.
    let after = play(&s, 3, "7H");
    assert_eq!(after.current_turn, "p4");
    assert_eq!(
        derive_transitions(&s, &after),
        vec![
            GameTransition::TrickCompleted {
                winner: "p4".to_string()
            },
            GameTransition::TurnBecame {
                player_id: "p4".to_string()
            }
        ]
    );
}

#[test]
fn forfeit_emits_only_game_finished() {
    let s = table();
    let action = GameAction::Forfeit {
        player_id: "p4".to_string(),
    };
    let after = apply(&s, &action, &mut rng()).unwrap();
    assert_eq!(
        derive_transitions(&s, &after),
        vec![GameTransition::GameFinished {
            winner: TeamKey::Team1
        }]
    );
}

#[test]
fn set_trump_by_non_caller_is_rejected() {
    let state = initialize_game("r1", ["a", "b", "c", "d"], None, &mut rng()).unwrap();
    let seat = state.seat_of(&state.trump_caller_id).unwrap();
    let other = state.player_at((seat + 1) % 4).clone();
    let action = GameAction::SetTrump {
        player_id: other,
        card_id: state.hand_of(seat)[0].id,
    };
    assert_eq!(apply(&state, &action, &mut rng()), Err(DomainError::NotYourTurn));

    let action = GameAction::SetTrump {
        player_id: "zed".to_string(),
        card_id: state.hand_of(seat)[0].id,
    };
    assert_eq!(
        apply(&state, &action, &mut rng()),
        Err(DomainError::UnknownPlayer("zed".to_string()))
    );
}

#[test]
fn reveal_after_forfeit_is_rejected() {
    let s = table();
    let forfeit = GameAction::Forfeit {
        player_id: "p4".to_string(),
    };
    let finished = apply(&s, &forfeit, &mut rng()).unwrap();
    assert_eq!(finished.status, GameStatus::Finished);

    let reveal = GameAction::RevealTrump {
        player_id: "p2".to_string(),
    };
    assert_eq!(
        apply(&finished, &reveal, &mut rng()),
        Err(DomainError::phase(GameStatus::Playing, GameStatus::Finished))
    );
    assert!(!finished.is_trump_revealed);
    assert_eq!(finished.trump_revealer_id, None);
}

#[test]
fn explicit_reveal_records_revealer() {
    let s = table();
    let action = GameAction::RevealTrump {
        player_id: "p2".to_string(),
    };
    let after = apply(&s, &action, &mut rng()).unwrap();
    assert!(after.is_trump_revealed);
    assert_eq!(after.trump_revealer_id.as_deref(), Some("p2"));
    assert!(!s.is_trump_revealed);
}

#[test]
fn random_play_action_advances_turn() {
    let s = table();
    let action = GameAction::PlayRandomCard {
        player_id: "p1".to_string(),
    };
    let after = apply(&s, &action, &mut rng()).unwrap();
    assert_eq!(after.current_trick.len(), 1);
    assert_eq!(after.current_turn, "p2");

    // Off-turn fallback is a no-op rather than an error.
    let action = GameAction::PlayRandomCard {
        player_id: "p3".to_string(),
    };
    assert_eq!(apply(&s, &action, &mut rng()).unwrap(), s);
}

#[test]
fn actions_use_tagged_wire_format() {
    let json = serde_json::json!({ "type": "forfeit", "player_id": "p1" });
    let action: GameAction = serde_json::from_value(json).unwrap();
    assert_eq!(action.name(), "forfeit");
    assert_eq!(action.player_id(), "p1");

    let s = table();
    let play = GameAction::PlayCard {
        player_id: "p1".to_string(),
        card_id: card_id(&s, 0, "KS"),
    };
    let value = serde_json::to_value(&play).unwrap();
    assert_eq!(value["type"], "play_card");
    let back: GameAction = serde_json::from_value(value).unwrap();
    assert_eq!(back, play);
}

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{FIRST_BATCH, HAND_SIZE};
use crate::domain::state::{GameState, TeamKey};
use crate::domain::test_state_helpers::{hands, play, player, playing_state};
use crate::domain::{
    initialize_game, project_all, project_for_player, set_trump, Card, ViewCard,
};
use crate::errors::domain::DomainError;

fn dealt() -> GameState {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    initialize_game("r1", ["p1", "p2", "p3", "p4"], None, &mut rng).unwrap()
}

fn visible(cards: &[ViewCard]) -> Vec<Card> {
    cards.iter().filter_map(|c| c.card().copied()).collect()
}

#[test]
fn calling_phase_shows_only_first_batch_even_to_owner() {
    let state = dealt();
    for view in project_all(&state) {
        let seat = view.viewer_seat as usize;
        for (i, hand) in view.hands.iter().enumerate() {
            assert_eq!(hand.len(), FIRST_BATCH);
            if i == seat {
                assert_eq!(visible(hand), state.hands[i][..FIRST_BATCH].to_vec());
            } else {
                assert!(hand.iter().all(ViewCard::is_hidden));
            }
        }
    }
}

#[test]
fn full_hands_visible_to_owner_once_playing() {
    let mut state = dealt();
    let seat = state.seat_of(&state.trump_caller_id).unwrap();
    let pick = state.hand_of(seat)[0].id;
    set_trump(&mut state, pick).unwrap();

    for view in project_all(&state) {
        let me = view.viewer_seat as usize;
        assert_eq!(view.own_hand(), state.hands[me]);
        for (i, hand) in view.hands.iter().enumerate() {
            assert_eq!(hand.len(), HAND_SIZE);
            if i != me {
                assert!(hand.iter().all(ViewCard::is_hidden));
            }
        }
    }
}

#[test]
fn concealed_trump_visible_only_to_caller() {
    let state = playing_state(
        hands([&["KS", "2C"], &["3H", "4D"], &["AS", "QH", "5C"], &["7H", "8D"]]),
        2,
        "QH",
    );

    let caller = project_for_player(&state, "p3").unwrap();
    assert_eq!(caller.trump_suit, state.trump_suit);
    assert_eq!(caller.hidden_trump_card, state.hidden_trump_card);

    for id in ["p1", "p2", "p4"] {
        let view = project_for_player(&state, id).unwrap();
        assert_eq!(view.trump_suit, None);
        assert_eq!(view.hidden_trump_card, None);
        assert!(!view.is_trump_revealed);
    }
}

#[test]
fn revealed_trump_visible_to_everyone() {
    let mut state = playing_state(
        hands([&["KS", "2C"], &["3H", "4D"], &["AS", "QH", "5C"], &["7H", "8D"]]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "KS");
    play(&mut state, 1, "3H");

    for view in project_all(&state) {
        assert_eq!(view.trump_suit, state.trump_suit);
        assert_eq!(view.hidden_trump_card, state.hidden_trump_card);
        assert_eq!(view.current_trick, state.current_trick);
    }
}

#[test]
fn opponents_captured_cards_hidden() {
    let mut state = playing_state(
        hands([&["KS", "2C"], &["3S", "4D"], &["AS", "QH"], &["9S", "8D"]]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "KS");
    play(&mut state, 1, "3S");
    play(&mut state, 2, "AS");
    play(&mut state, 3, "9S");
    assert_eq!(state.teams.team1.won_cards.len(), 4);

    let mine = project_for_player(&state, "p1").unwrap();
    assert_eq!(visible(&mine.teams.team1.won_cards), state.teams.team1.won_cards);

    let theirs = project_for_player(&state, "p2").unwrap();
    assert_eq!(theirs.teams.team1.won_cards.len(), 4);
    assert!(theirs.teams.team1.won_cards.iter().all(ViewCard::is_hidden));
    assert_eq!(theirs.teams.team1.tricks_won, 1);

    // Last trick stays public.
    assert_eq!(theirs.last_trick_cards, state.last_trick_cards);
    assert_eq!(theirs.last_trick_winner.as_deref(), Some("p3"));
}

#[test]
fn playable_lists_legal_cards_for_player_on_turn_only() {
    let mut state = playing_state(
        hands([&["KS", "2C"], &["3S", "4D"], &["AS", "QH", "5C"], &["9S", "8D"]]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "KS");
    play(&mut state, 1, "3S");

    let on_turn = project_for_player(&state, "p3").unwrap();
    assert!(on_turn.is_my_turn());
    let spade_ace = state.hands[2][0].id;
    assert_eq!(on_turn.playable, vec![spade_ace]);

    let waiting = project_for_player(&state, "p4").unwrap();
    assert!(!waiting.is_my_turn());
    assert!(waiting.playable.is_empty());
}

#[test]
fn unknown_viewer_is_rejected() {
    let state = dealt();
    assert_eq!(
        project_for_player(&state, "ghost").unwrap_err(),
        DomainError::UnknownPlayer("ghost".to_string())
    );
}

#[test]
fn projection_never_touches_canonical_state() {
    let state = dealt();
    let before = state.clone();
    let mut views = project_all(&state);
    assert_eq!(views.len(), 4);

    views[0].hands[0].clear();
    views[0].logs.push("tampered".to_string());
    views[0].teams.team1.tricks_won = 9;
    assert_eq!(state, before);
}

#[test]
fn hidden_cards_serialize_without_identity() {
    let state = dealt();
    let view = project_for_player(&state, "p1").unwrap();
    let json = serde_json::to_value(&view).unwrap();

    let other = &json["hands"][1][0];
    assert_eq!(other, &serde_json::json!({ "visibility": "hidden" }));
    assert_eq!(json["viewerId"], "p1");
    assert_eq!(json["status"], "calling_trump");

    let own = &json["hands"][0][0];
    assert_eq!(own["visibility"], "visible");
    assert!(own.get("id").is_some());
    assert_eq!(TeamKey::for_seat(view.viewer_seat), TeamKey::Team1);
}

use crate::domain::rules::HAND_SIZE;
use crate::domain::state::{GameState, GameStatus, TeamKey};
use crate::domain::test_state_helpers::{card_id, hands, play, player, playing_state};
use crate::domain::{legal_moves, play_card, Card, CardId, Suit};
use crate::errors::domain::DomainError;

/// p3 holds the concealed trump (QH); p1 is on lead.
fn scenario_table() -> GameState {
    let mut state = playing_state(
        hands([
            &["KS", "2C"],
            &["3H", "4D"],
            &["AS", "QH", "5C"],
            &["7H", "8D"],
        ]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    state
}

#[test]
fn trump_break_reveals_and_highest_trump_wins() {
    let mut state = scenario_table();

    play(&mut state, 0, "KS");
    let r = play(&mut state, 1, "3H");
    assert!(r.trump_revealed);
    assert!(state.is_trump_revealed);
    assert_eq!(state.trump_revealer_id.as_deref(), Some("p2"));

    play(&mut state, 2, "AS");
    let r = play(&mut state, 3, "7H");

    let trick = r.trick.expect("fourth card resolves the trick");
    assert_eq!(trick.winner, "p4");
    assert_eq!(trick.team, TeamKey::Team2);
    assert_eq!(state.teams.team2.tricks_won, 1);
    assert_eq!(state.teams.team2.won_cards.len(), 4);
    assert_eq!(state.current_turn, "p4");
    assert_eq!(state.last_trick_winner.as_deref(), Some("p4"));
    assert_eq!(state.last_trick_cards.as_ref().map(Vec::len), Some(4));
    assert!(state.current_trick.is_empty());
    assert!(state.logs.iter().any(|l| l == "p4 won the trick."));
}

#[test]
fn highest_lead_card_wins_without_trump() {
    let mut state = playing_state(
        hands([&["KS"], &["3S"], &["AS", "QH"], &["9S"]]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "KS");
    play(&mut state, 1, "3S");
    play(&mut state, 2, "AS");
    let r = play(&mut state, 3, "9S");
    assert_eq!(r.trick.map(|t| t.winner), Some("p3".to_string()));
    assert!(!state.is_trump_revealed);
}

#[test]
fn ten_in_trick_is_credited() {
    let mut state = playing_state(
        hands([&["TS", "2C"], &["3S", "2D"], &["AS", "QH"], &["9S", "2S"]]),
        2,
        "QH",
    );
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "TS");
    play(&mut state, 1, "3S");
    play(&mut state, 2, "AS");
    let r = play(&mut state, 3, "9S");
    assert_eq!(r.trick.map(|t| t.tens), Some(1));
    assert_eq!(state.teams.team1.tens_collected, 1);
    assert_eq!(state.teams.team2.tens_collected, 0);
}

#[test]
fn rejects_out_of_turn() {
    let mut state = scenario_table();
    let before = state.clone();
    let id = card_id(&state, 1, "3H");
    assert_eq!(play_card(&mut state, "p2", id), Err(DomainError::NotYourTurn));
    assert_eq!(state, before);
}

#[test]
fn rejects_unknown_player_as_not_their_turn() {
    let mut state = scenario_table();
    let before = state.clone();
    assert_eq!(
        play_card(&mut state, "ghost", CardId::new()),
        Err(DomainError::NotYourTurn)
    );
    assert_eq!(state, before);
}

#[test]
fn rejects_card_not_in_hand() {
    let mut state = scenario_table();
    let before = state.clone();
    let other = card_id(&state, 1, "3H");
    assert_eq!(play_card(&mut state, "p1", other), Err(DomainError::CardNotInHand));
    assert_eq!(
        play_card(&mut state, "p1", CardId::new()),
        Err(DomainError::CardNotInHand)
    );
    assert_eq!(state, before);
}

#[test]
fn rejects_off_suit_when_able_to_follow() {
    let mut state = scenario_table();
    play(&mut state, 0, "KS");
    play(&mut state, 1, "3H");
    let before = state.clone();
    let id = card_id(&state, 2, "5C");
    assert_eq!(
        play_card(&mut state, "p3", id),
        Err(DomainError::MustFollowSuit(Suit::Spades))
    );
    assert_eq!(state, before);
}

#[test]
fn concealed_trump_cannot_be_played_while_other_cards_remain() {
    let mut state = scenario_table();
    state.current_turn = player(2).to_string();
    let before = state.clone();
    let id = card_id(&state, 2, "QH");
    assert_eq!(play_card(&mut state, "p3", id), Err(DomainError::TrumpNotRevealed));
    assert_eq!(state, before);
}

#[test]
fn concealed_trump_as_last_card_is_playable_and_reveals() {
    let mut state = playing_state(hands([&["KS"], &["3S"], &["QH"], &["9S"]]), 2, "QH");
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "KS");
    play(&mut state, 1, "3S");

    assert_eq!(legal_moves(&state, "p3").len(), 1);
    let r = play(&mut state, 2, "QH");
    assert!(r.trump_revealed);
    assert_eq!(state.trump_revealer_id.as_deref(), Some("p3"));

    let r = play(&mut state, 3, "9S");
    assert_eq!(r.trick.map(|t| t.winner), Some("p3".to_string()));
}

#[test]
fn revealed_trump_card_is_ordinary() {
    let mut state = scenario_table();
    state.is_trump_revealed = true;
    state.current_turn = player(2).to_string();
    let legal: Vec<Card> = legal_moves(&state, "p3");
    assert_eq!(legal.len(), 3);
}

#[test]
fn leading_a_revealed_trump_wins_against_lower_trumps() {
    let mut state = playing_state(
        hands([&["AH", "2C"], &["3H"], &["QH", "5C"], &["7H"]]),
        2,
        "QH",
    );
    state.is_trump_revealed = true;
    state.current_turn = player(0).to_string();
    play(&mut state, 0, "AH");
    play(&mut state, 1, "3H");
    play(&mut state, 2, "QH");
    let r = play(&mut state, 3, "7H");
    assert_eq!(r.trick.map(|t| t.winner), Some("p1".to_string()));
}

#[test]
fn rejects_play_outside_playing_phase() {
    let mut state = scenario_table();
    state.status = GameStatus::CallingTrump;
    let id = card_id(&state, 0, "KS");
    assert_eq!(
        play_card(&mut state, "p1", id),
        Err(DomainError::phase(GameStatus::Playing, GameStatus::CallingTrump))
    );

    state.status = GameStatus::Finished;
    assert!(matches!(
        play_card(&mut state, "p1", id),
        Err(DomainError::InvalidPhase { .. })
    ));
}

#[test]
fn thirteenth_trick_finishes_the_match() {
    let mut state = playing_state(hands([&["TS"], &["3S"], &["AS", "QH"], &["9S"]]), 2, "QH");
    state.current_turn = player(0).to_string();
    state.teams.team1.tricks_won = 6;
    state.teams.team2.tricks_won = 6;
    state.teams.team1.tens_collected = 1;
    state.teams.team2.tens_collected = 2;

    play(&mut state, 0, "TS");
    play(&mut state, 1, "3S");
    play(&mut state, 2, "AS");
    let r = play(&mut state, 3, "9S");

    assert!(r.finished);
    assert_eq!(state.status, GameStatus::Finished);
    assert_eq!(state.teams.total_tricks() as usize, HAND_SIZE);
    // 2-2 tens split, team1 has 7 tricks to 6
    assert_eq!(state.winner, Some(TeamKey::Team1));
    assert!(state
        .logs
        .last()
        .is_some_and(|l| l == "Game finished. Winner: team1"));
}

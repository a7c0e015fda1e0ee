use std::cmp::Ordering;

use crate::domain::cards_logic::count_tens;
use crate::domain::state::{TeamKey, Teams};
use crate::domain::Card;

/// Credit a resolved trick to `team`. Returns the number of tens captured.
pub fn award_trick(teams: &mut Teams, team: TeamKey, cards: &[Card]) -> u8 {
    let tens = count_tens(cards);
    let t = teams.get_mut(team);
    t.tricks_won += 1;
    t.tens_collected += tens;
    t.won_cards.extend_from_slice(cards);
    tens
}

/// Match winner after all tricks: more tens wins, then more tricks.
///
/// With 13 tricks the trick count cannot tie, so the final fallback never
/// decides a completed match.
pub fn decide_winner(teams: &Teams) -> TeamKey {
    let (t1, t2) = (&teams.team1, &teams.team2);
    match t1.tens_collected.cmp(&t2.tens_collected) {
        Ordering::Greater => TeamKey::Team1,
        Ordering::Less => TeamKey::Team2,
        Ordering::Equal => {
            if t1.tricks_won > t2.tricks_won {
                TeamKey::Team1
            } else {
                TeamKey::Team2
            }
        }
    }
}

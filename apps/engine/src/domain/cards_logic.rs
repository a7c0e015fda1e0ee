//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Rank, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn count_tens(cards: &[Card]) -> u8 {
    cards.iter().filter(|c| c.rank == Rank::Ten).count() as u8
}

/// Whether `a` beats the current best card `b` in a trick led with `lead`.
///
/// `trump` is the trump suit only once it is revealed; a concealed trump suit
/// has no power and must be passed as `None`.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump_suit) = trump {
        let a_trump = a.suit == trump_suit;
        let b_trump = b.suit == trump_suit;
        if a_trump && !b_trump {
            return true;
        }
        if b_trump && !a_trump {
            return false;
        }
        // Same trump status
        if a_trump && b_trump {
            return a.rank > b.rank;
        }
    }
    // No trump involved: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

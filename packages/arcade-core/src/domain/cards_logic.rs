//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Return the card that wins between `a` and `b`, or `None` when neither
/// can beat the other (two different suits, neither trump nor lead).
///
/// Precedence: trump over everything, then the lead suit over off-suit
/// cards, then rank within a suit with the Ace high.
pub fn compare_cards(a: Card, b: Card, lead: Option<Suit>, trump: Option<Suit>) -> Option<Card> {
    if a.suit == b.suit {
        return if b.rank.trick_strength() > a.rank.trick_strength() {
            Some(b)
        } else {
            Some(a)
        };
    }
    if let Some(trump) = trump {
        if a.suit == trump {
            return Some(a);
        }
        if b.suit == trump {
            return Some(b);
        }
    }
    match lead {
        Some(lead) if a.suit == lead => Some(a),
        Some(lead) if b.suit == lead => Some(b),
        _ => None,
    }
}

/// Cards the holder may legally play: the lead suit if they hold any,
/// otherwise the whole hand.
pub fn playable_cards(hand: &[Card], lead: Option<&Card>) -> Vec<Card> {
    if let Some(lead) = lead {
        if hand_has_suit(hand, lead.suit) {
            return hand.iter().copied().filter(|c| c.suit == lead.suit).collect();
        }
    }
    hand.to_vec()
}

/// Index of the winning play in a trick. The first card fixes the lead
/// suit; the fold never loses its footing because the running best is
/// always either lead suit or trump.
pub fn trick_winner_index(cards: &[Card], trump: Option<Suit>) -> Option<usize> {
    let lead = cards.first()?.suit;
    let mut best_idx = 0usize;
    for (i, &card) in cards.iter().enumerate().skip(1) {
        let best = cards[best_idx];
        if compare_cards(best, card, Some(lead), trump) == Some(card) {
            best_idx = i;
        }
    }
    Some(best_idx)
}

//! Core card-related types: Card, Rank, Suit

use std::hash::{Hash, Hasher};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
}

/// Card rank. Declaration order is ace-low (Ace = 1 .. King = 13), which is
/// the order used when building decks. Trick comparison must go through
/// [`Rank::trick_strength`], where the Ace ranks above the King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank, 1..=13 with the Ace low.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Strength used to decide tricks: Two = 2 .. King = 13, Ace = 14.
    pub const fn trick_strength(self) -> u8 {
        match self {
            Rank::Ace => 14,
            other => other as u8,
        }
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

/// A playing card. `face_down` is an orientation flag only: equality,
/// hashing and ordering look at suit and rank.
#[derive(Debug, Copy, Clone)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_down: bool,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_down: false,
        }
    }

    pub fn flip(&mut self) {
        self.face_down = !self.face_down;
    }

    pub fn face_up(mut self) -> Self {
        self.face_down = false;
        self
    }

    pub fn turned_down(mut self) -> Self {
        self.face_down = true;
        self
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

// Note: Ord on Card is only for stable sorting: suit order S<H<D<C then ace-low rank.
// Do not use for trick resolution; see cards_logic::compare_cards.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

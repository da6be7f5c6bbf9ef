//! Ordered card pile with the four physical-shuffle simulations.
//!
//! Index 0 is the top of the pile. Every shuffle is a permutation: the
//! pile keeps the same multiset of cards and the same size.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::{GameError, IllegalMoveKind, NotFoundKind};

/// Number of passes an overhand shuffle makes.
const OVERHAND_PASSES: std::ops::RangeInclusive<usize> = 5..=10;
/// Size of each packet slid off during an overhand pass.
pub(crate) const OVERHAND_PACKET: std::ops::RangeInclusive<usize> = 5..=15;

/// The named shuffle algorithms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleKind {
    Riffle,
    Scramble,
    Cut,
    Overhand,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPile {
    cards: Vec<Card>,
}

impl CardPile {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// A fresh 52-card deck in New Deck Order, top card first.
    ///
    /// Suits run Spades, Hearts, Diamonds, Clubs. Spades and Diamonds go
    /// Ace..King; Hearts and Clubs go King..Ace.
    pub fn new_deck() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            let descending = matches!(suit, Suit::Hearts | Suit::Clubs);
            let ranks: Box<dyn Iterator<Item = Rank>> = if descending {
                Box::new(Rank::ALL.into_iter().rev())
            } else {
                Box::new(Rank::ALL.into_iter())
            };
            cards.extend(ranks.map(|rank| Card::new(suit, rank)));
        }
        Self { cards }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top_card(&self) -> Result<&Card, GameError> {
        self.card_at(0)
    }

    pub fn bottom_card(&self) -> Result<&Card, GameError> {
        self.cards
            .last()
            .ok_or_else(|| GameError::out_of_range(0, 0))
    }

    pub fn card_at(&self, index: usize) -> Result<&Card, GameError> {
        self.cards
            .get(index)
            .ok_or_else(|| GameError::out_of_range(index, self.cards.len()))
    }

    pub(crate) fn top_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Place a card on top of the pile.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Place cards on top of the pile, keeping their relative order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        let mut incoming: Vec<Card> = cards.into_iter().collect();
        incoming.append(&mut self.cards);
        self.cards = incoming;
    }

    /// Remove the first card matching `card`. An absent card is reported
    /// as `NotFound` and leaves the pile untouched.
    pub fn remove_card(&mut self, card: &Card) -> Result<(), GameError> {
        self.take_card(card).map(|_| ())
    }

    /// Like [`remove_card`](Self::remove_card) but hands back the removed card,
    /// preserving its orientation.
    pub fn take_card(&mut self, card: &Card) -> Result<Card, GameError> {
        let pos = self.cards.iter().position(|c| c == card).ok_or_else(|| {
            GameError::not_found(NotFoundKind::Card, format!("{card} not in pile"))
        })?;
        Ok(self.cards.remove(pos))
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::illegal(IllegalMoveKind::PileEmpty, "Pile is empty"));
        }
        Ok(self.cards.remove(0))
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, kind: ShuffleKind, rng: &mut R) {
        trace!(?kind, size = self.cards.len(), "shuffling pile");
        match kind {
            ShuffleKind::Riffle => self.riffle_shuffle(rng),
            ShuffleKind::Scramble => self.scramble_shuffle(rng),
            ShuffleKind::Cut => self.cut(rng),
            ShuffleKind::Overhand => self.overhand_shuffle(rng),
        }
    }

    /// Split at the midpoint (the lower half takes the odd card) and build
    /// the result by repeatedly popping the last card of a half picked by
    /// a fair coin. Choices are independent, so streaks from one half
    /// are expected.
    pub fn riffle_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut lower = std::mem::take(&mut self.cards);
        let mut upper: Vec<Card> = lower.drain(..lower.len() / 2).collect();
        let mut result = Vec::with_capacity(upper.len() + lower.len());

        while !upper.is_empty() || !lower.is_empty() {
            let take_upper = match (upper.is_empty(), lower.is_empty()) {
                (false, true) => true,
                (true, false) => false,
                _ => rng.random_bool(0.5),
            };
            let half = if take_upper { &mut upper } else { &mut lower };
            if let Some(card) = half.pop() {
                result.push(card);
            }
        }
        self.cards = result;
    }

    /// Uniformly pick one of the remaining cards until none remain.
    pub fn scramble_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut remaining = std::mem::take(&mut self.cards);
        let mut result = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let idx = rng.random_range(0..remaining.len());
            result.push(remaining.swap_remove(idx));
        }
        self.cards = result;
    }

    /// Move `[split, size)` in front of `[0, split)` for a uniform split.
    pub fn cut<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.is_empty() {
            return;
        }
        let split = rng.random_range(0..self.cards.len());
        self.cards.rotate_left(split);
    }

    /// Five to ten passes of [`overhand_pass`](Self::overhand_pass).
    pub fn overhand_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let passes = rng.random_range(OVERHAND_PASSES);
        for _ in 0..passes {
            self.overhand_pass(rng);
        }
    }

    /// Slide packets of 5..=15 cards off the front of the pile, stacking
    /// each one on top of the previous ones.
    pub(crate) fn overhand_pass<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut body = std::mem::take(&mut self.cards);
        let mut stacked: Vec<Card> = Vec::with_capacity(body.len());
        while !body.is_empty() {
            let packet = rng.random_range(OVERHAND_PACKET).min(body.len());
            let mut next: Vec<Card> = body.drain(..packet).collect();
            next.append(&mut stacked);
            stacked = next;
        }
        self.cards = stacked;
    }
}

impl IntoIterator for CardPile {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for CardPile {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

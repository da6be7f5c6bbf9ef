//! Domain layer: cards, piles and the game engines built on them.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod grid;
pub mod participant;
pub mod pile;
pub mod snapshot;
pub mod whist;

#[cfg(test)]
mod tests_whist;

// Re-exports for ergonomics
pub use cards_logic::{compare_cards, hand_has_suit, playable_cards, trick_winner_index};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use participant::{Participant, ParticipantId, Seat};
pub use pile::{CardPile, ShuffleKind};

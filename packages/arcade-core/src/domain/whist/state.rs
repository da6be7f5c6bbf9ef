use serde::{Deserialize, Serialize};

use crate::domain::participant::{next_seat, Seat};
use crate::domain::{Card, CardPile, Suit};
use crate::errors::GameError;

pub const PLAYERS: usize = 2;

/// Round stages. Strictly forward; nothing follows `Duel`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Cards are dealt and trump is turned.
    Deal,
    /// Tricks are played for prize cards from the stock.
    Draft,
    /// Tricks are played for points.
    Duel,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Deal => Some(Stage::Draft),
            Stage::Draft => Some(Stage::Duel),
            Stage::Duel => None,
        }
    }

    pub fn is_trick_stage(self) -> bool {
        matches!(self, Stage::Draft | Stage::Duel)
    }
}

/// Result of resolving a full trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickOutcome {
    /// Stage the trick was played in.
    pub stage: Stage,
    pub winner: Seat,
    /// Plays in order, leader first.
    pub plays: Vec<(Seat, Card)>,
    /// Draft only: (card taken by the winner, card taken by the loser).
    pub prizes: Option<(Card, Card)>,
    /// Set when this trick ended the round: points scored per seat.
    pub round_points: Option<[u32; PLAYERS]>,
    /// Stage after the trick was cleared.
    pub stage_after: Stage,
}

/// Entire round container, sufficient for the pure Whist operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhistRoundState {
    pub stage: Stage,
    /// 1-based round counter.
    pub round_no: u32,
    /// Set once per round when the trump indicator is turned.
    pub trump: Option<Suit>,
    /// Stock; during Draft its top card is the face-up prize.
    pub draw_pile: CardPile,
    pub discard_pile: CardPile,
    /// Ordered plays of the current trick, leader first.
    pub trick: Vec<(Seat, Card)>,
    pub dealer: Seat,
    /// Seat expected to act.
    pub turn: Seat,
    pub hands: [Vec<Card>; PLAYERS],
    /// Duel tricks won this round.
    pub tricks_won: [u8; PLAYERS],
    /// Cumulative points across rounds.
    pub scores: [u32; PLAYERS],
    /// True once the Duel has been played out and scored.
    pub round_scored: bool,
    pub match_winner: Option<Seat>,
}

impl WhistRoundState {
    /// First round, dealer in seat 0, stock holding a face-down New Deck Order deck.
    pub fn initial() -> Self {
        Self::for_round(1, 0, [0; PLAYERS])
    }

    pub(crate) fn for_round(round_no: u32, dealer: Seat, scores: [u32; PLAYERS]) -> Self {
        Self {
            stage: Stage::Deal,
            round_no,
            trump: None,
            draw_pile: CardPile::new_deck().into_iter().map(Card::turned_down).collect(),
            discard_pile: CardPile::empty(),
            trick: Vec::with_capacity(PLAYERS),
            dealer,
            turn: next_seat(dealer, PLAYERS),
            hands: Default::default(),
            tricks_won: [0; PLAYERS],
            scores,
            round_scored: false,
            match_winner: None,
        }
    }

    pub fn lead_card(&self) -> Option<&Card> {
        self.trick.first().map(|(_, c)| c)
    }

    pub fn trick_is_full(&self) -> bool {
        self.trick.len() >= PLAYERS
    }

    /// Every hand holds cards and all hands are the same size.
    pub fn hands_dealt(&self) -> bool {
        let first = self.hands[0].len();
        first > 0 && self.hands.iter().all(|h| h.len() == first)
    }

    /// The face-up prize while drafting.
    pub fn prize_card(&self) -> Option<&Card> {
        if self.stage != Stage::Draft {
            return None;
        }
        self.draw_pile.top_card().ok()
    }

    pub(crate) fn require_stage(&self, allowed: &[Stage], action: &str) -> Result<(), GameError> {
        if allowed.contains(&self.stage) {
            return Ok(());
        }
        Err(GameError::stage(format!(
            "cannot {action} during {:?}",
            self.stage
        )))
    }
}

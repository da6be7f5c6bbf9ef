//! Public snapshots for observing a game without borrowing its internals.

use serde::{Deserialize, Serialize};

use crate::domain::grid::{GridKind, GridStatus, Mark};
use crate::domain::participant::ParticipantId;
use crate::domain::whist::Stage;
use crate::domain::{Card, Suit};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub kind: GridKind,
    pub rows: usize,
    pub cols: usize,
    /// One glyph per cell, row-major, '.' for empty.
    pub board: String,
    pub cells: Vec<Option<Mark>>,
    pub current_player: ParticipantId,
    pub winner: Option<ParticipantId>,
    pub winning_line: Vec<usize>,
    pub status: GridStatus,
    pub is_drawn: bool,
    pub is_game_over: bool,
    pub moves_played: u32,
}

/// Public round facts. Hands are reported by size only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhistSnapshot {
    pub stage: Stage,
    pub round_no: u32,
    pub trump: Option<Suit>,
    pub prize_card: Option<Card>,
    pub trick: Vec<(ParticipantId, Card)>,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    /// Indexed like `players`.
    pub hand_sizes: Vec<usize>,
    pub tricks_won: Vec<u8>,
    pub scores: Vec<u32>,
    pub players: Vec<ParticipantId>,
    pub turn: ParticipantId,
    pub dealer: ParticipantId,
    pub round_over: bool,
    pub match_winner: Option<ParticipantId>,
}

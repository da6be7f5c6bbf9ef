//! Seated participants and seat arithmetic.

use serde::{Deserialize, Serialize};

use crate::errors::{GameError, NotFoundKind};

/// Positional index of a participant at a table, 0-based.
pub type Seat = u8;

/// Stable identity of a participant. Two `Participant` values with the
/// same id are the same player, even across reconnects.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub i64);

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

/// Seat `delta` steps clockwise from `seat` at a table of `players`.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8, players: usize) -> Seat {
    let n = players.max(1) as i16;
    ((seat as i16 + delta as i16).rem_euclid(n)) as Seat
}

#[inline]
pub fn next_seat(seat: Seat, players: usize) -> Seat {
    seat_offset(seat, 1, players)
}

/// Find the seat of `id` among `players`.
pub fn seat_of(players: &[Participant], id: ParticipantId) -> Result<Seat, GameError> {
    players
        .iter()
        .position(|p| p.id == id)
        .map(|i| i as Seat)
        .ok_or_else(|| {
            GameError::not_found(NotFoundKind::Player, format!("player {id} is not seated"))
        })
}

/// Reject tables where the same id appears twice.
pub fn require_distinct(players: &[Participant]) -> Result<(), GameError> {
    for (i, p) in players.iter().enumerate() {
        if players[i + 1..].iter().any(|q| q.id == p.id) {
            return Err(GameError::config(format!(
                "player {} is seated more than once",
                p.id
            )));
        }
    }
    Ok(())
}

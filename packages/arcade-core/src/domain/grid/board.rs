//! Fixed-size grid, turn alternation and line-based win detection.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::participant::{
    next_seat, require_distinct, seat_of, Participant, ParticipantId, Seat,
};
use crate::domain::snapshot::GridSnapshot;
use crate::errors::{GameError, IllegalMoveKind};

/// Line directions as (row step, col step): horizontal, vertical, both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Mark left by the player in seat 0 (`First`) or seat 1 (`Second`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Mark {
    First,
    Second,
}

impl Mark {
    pub fn for_seat(seat: Seat) -> Mark {
        if seat == 0 {
            Mark::First
        } else {
            Mark::Second
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridKind {
    TicTacToe,
    ConnectFour,
}

impl GridKind {
    pub const fn rows(self) -> usize {
        match self {
            GridKind::TicTacToe => 3,
            GridKind::ConnectFour => 6,
        }
    }

    pub const fn cols(self) -> usize {
        match self {
            GridKind::TicTacToe => 3,
            GridKind::ConnectFour => 7,
        }
    }

    /// Length of the run of identical marks that wins.
    pub const fn win_len(self) -> usize {
        match self {
            GridKind::TicTacToe => 3,
            GridKind::ConnectFour => 4,
        }
    }

    pub const fn glyph(self, mark: Mark) -> char {
        match (self, mark) {
            (GridKind::TicTacToe, Mark::First) => 'X',
            (GridKind::TicTacToe, Mark::Second) => 'O',
            (GridKind::ConnectFour, Mark::First) => 'R',
            (GridKind::ConnectFour, Mark::Second) => 'Y',
        }
    }
}

/// Exactly one of these holds at any time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridStatus {
    InProgress,
    Won { seat: Seat },
    Drawn,
}

/// Board container. Cells are row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGame {
    kind: GridKind,
    players: [Participant; 2],
    cells: Vec<Option<Mark>>,
    current: Seat,
    winner: Option<Seat>,
    winning_line: Vec<usize>,
    moves_played: u32,
}

impl GridGame {
    pub fn new(kind: GridKind, players: [Participant; 2]) -> Result<Self, GameError> {
        require_distinct(&players)?;
        Ok(Self {
            kind,
            players,
            cells: vec![None; kind.rows() * kind.cols()],
            current: 0,
            winner: None,
            winning_line: Vec::new(),
            moves_played: 0,
        })
    }

    pub fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn players(&self) -> &[Participant; 2] {
        &self.players
    }

    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Option<Mark>, GameError> {
        if row >= self.kind.rows() {
            return Err(GameError::out_of_range(row, self.kind.rows()));
        }
        if col >= self.kind.cols() {
            return Err(GameError::out_of_range(col, self.kind.cols()));
        }
        Ok(self.cells[row * self.kind.cols() + col])
    }

    pub fn current_player(&self) -> &Participant {
        &self.players[self.current as usize]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn winner(&self) -> Option<&Participant> {
        self.winner.map(|seat| &self.players[seat as usize])
    }

    /// Cell indices of the winning run, empty unless the game is won.
    pub fn winning_line(&self) -> &[usize] {
        &self.winning_line
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn is_drawn(&self) -> bool {
        self.winner.is_none() && self.cells.iter().all(Option::is_some)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.is_drawn()
    }

    pub fn status(&self) -> GridStatus {
        match self.winner {
            Some(seat) => GridStatus::Won { seat },
            None if self.is_drawn() => GridStatus::Drawn,
            None => GridStatus::InProgress,
        }
    }

    /// Back to an empty board with seat 0 to move. The seated players stay.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.current = 0;
        self.winner = None;
        self.winning_line.clear();
        self.moves_played = 0;
    }

    /// Turn and game-over checks shared by every move; returns the actor's seat.
    pub(crate) fn require_actor(&self, player: ParticipantId) -> Result<Seat, GameError> {
        let seat = seat_of(&self.players, player)?;
        if self.is_game_over() {
            return Err(GameError::illegal(
                IllegalMoveKind::GameOver,
                "Game is already over",
            ));
        }
        if seat != self.current {
            return Err(GameError::illegal(IllegalMoveKind::OutOfTurn, "Out of turn"));
        }
        Ok(seat)
    }

    /// Put the actor's mark in `index`, then settle win or turn.
    /// Callers have already validated the move.
    pub(crate) fn mark(&mut self, seat: Seat, index: usize) {
        self.cells[index] = Some(Mark::for_seat(seat));
        self.moves_played += 1;
        debug!(kind = ?self.kind, seat, index, "mark placed");

        if let Some(line) = self.find_winning_line() {
            self.winner = Some(seat);
            self.winning_line = line;
            info!(
                kind = ?self.kind,
                winner = %self.players[seat as usize].id,
                moves = self.moves_played,
                "grid game won"
            );
            return;
        }
        if self.is_drawn() {
            info!(kind = ?self.kind, moves = self.moves_played, "grid game drawn");
            return;
        }
        self.current = next_seat(seat, 2);
    }

    /// Scan every row, column and diagonal for a run of `win_len` identical marks.
    pub fn find_winning_line(&self) -> Option<Vec<usize>> {
        let rows = self.kind.rows() as isize;
        let cols = self.kind.cols() as isize;
        let len = self.kind.win_len() as isize;

        for row in 0..rows {
            for col in 0..cols {
                let Some(mark) = self.cells[(row * cols + col) as usize] else {
                    continue;
                };
                for (dr, dc) in DIRECTIONS {
                    let end_row = row + dr * (len - 1);
                    let end_col = col + dc * (len - 1);
                    if !(0..rows).contains(&end_row) || !(0..cols).contains(&end_col) {
                        continue;
                    }
                    let line: Vec<usize> = (0..len)
                        .map(|k| ((row + dr * k) * cols + (col + dc * k)) as usize)
                        .collect();
                    if line.iter().all(|&i| self.cells[i] == Some(mark)) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// Board as a string: one glyph per cell, '.' for empty, row-major.
    pub fn board_string(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or('.', |m| self.kind.glyph(m)))
            .collect()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            kind: self.kind,
            rows: self.kind.rows(),
            cols: self.kind.cols(),
            board: self.board_string(),
            cells: self.cells.clone(),
            current_player: self.current_player().id,
            winner: self.winner().map(|p| p.id),
            winning_line: self.winning_line.clone(),
            status: self.status(),
            is_drawn: self.is_drawn(),
            is_game_over: self.is_game_over(),
            moves_played: self.moves_played,
        }
    }
}

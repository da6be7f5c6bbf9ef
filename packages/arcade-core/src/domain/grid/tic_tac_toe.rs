use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::domain::grid::board::{GridGame, GridKind};
use crate::domain::participant::{Participant, ParticipantId};
use crate::errors::{GameError, IllegalMoveKind};

/// 3x3 board, three in a row wins. Positions are 0..=8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    grid: GridGame,
}

impl TicTacToe {
    pub const CELLS: usize = 9;

    pub fn new(players: [Participant; 2]) -> Result<Self, GameError> {
        Ok(Self {
            grid: GridGame::new(GridKind::TicTacToe, players)?,
        })
    }

    /// Mark `position` for `player`. Rejected moves leave the board unchanged.
    pub fn place(&mut self, player: ParticipantId, position: usize) -> Result<(), GameError> {
        self.try_place(player, position).inspect_err(|e| {
            debug!(%player, position, code = %e.code(), "placement rejected");
        })
    }

    fn try_place(&mut self, player: ParticipantId, position: usize) -> Result<(), GameError> {
        if position >= Self::CELLS {
            return Err(GameError::out_of_range(position, Self::CELLS));
        }
        let seat = self.grid.require_actor(player)?;
        if self.grid.cells()[position].is_some() {
            return Err(GameError::illegal(
                IllegalMoveKind::CellOccupied,
                format!("Cell {position} is occupied"),
            ));
        }
        self.grid.mark(seat, position);
        Ok(())
    }

    /// Open positions, empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.grid.is_game_over() {
            return Vec::new();
        }
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }
}

impl Deref for TicTacToe {
    type Target = GridGame;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

impl DerefMut for TicTacToe {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.grid
    }
}

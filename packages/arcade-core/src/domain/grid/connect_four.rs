use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::domain::grid::board::{GridGame, GridKind};
use crate::domain::participant::{Participant, ParticipantId};
use crate::errors::{GameError, IllegalMoveKind};

/// 6 rows x 7 columns, pieces fall to the lowest empty row, four in a row wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    grid: GridGame,
}

impl ConnectFour {
    pub const ROWS: usize = 6;
    pub const COLS: usize = 7;

    pub fn new(players: [Participant; 2]) -> Result<Self, GameError> {
        Ok(Self {
            grid: GridGame::new(GridKind::ConnectFour, players)?,
        })
    }

    /// Row the next piece in `column` would land in (row 0 is the top).
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        if column >= Self::COLS {
            return Err(GameError::out_of_range(column, Self::COLS));
        }
        Ok((0..Self::ROWS)
            .rev()
            .find(|&row| self.grid.cells()[row * Self::COLS + column].is_none()))
    }

    /// Drop a piece for `player` into `column`; returns the row it landed in.
    pub fn drop(&mut self, player: ParticipantId, column: usize) -> Result<usize, GameError> {
        self.try_drop(player, column).inspect_err(|e| {
            debug!(%player, column, code = %e.code(), "drop rejected");
        })
    }

    fn try_drop(&mut self, player: ParticipantId, column: usize) -> Result<usize, GameError> {
        let landing = self.landing_row(column)?;
        let seat = self.grid.require_actor(player)?;
        let Some(row) = landing else {
            return Err(GameError::illegal(
                IllegalMoveKind::ColumnFull,
                format!("Column {column} is full"),
            ));
        };
        self.grid.mark(seat, row * Self::COLS + column);
        Ok(row)
    }

    /// Columns that can still take a piece, empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.grid.is_game_over() {
            return Vec::new();
        }
        (0..Self::COLS)
            .filter(|&c| self.grid.cells()[c].is_none())
            .collect()
    }
}

impl Deref for ConnectFour {
    type Target = GridGame;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

impl DerefMut for ConnectFour {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.grid
    }
}

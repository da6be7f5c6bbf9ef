//! Engine-level error type shared by every game.
//!
//! Every variant is recoverable: an operation that returns `Err` leaves the
//! engine exactly as it was before the call.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Rule violations that reject a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    OutOfTurn,
    CellOccupied,
    ColumnFull,
    GameOver,
    MustFollowSuit,
    TrickFull,
    TrickIncomplete,
    TrickInProgress,
    PileEmpty,
    RoundOver,
}

/// Things a caller can reference that may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NotFoundKind {
    Card,
    Player,
}

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Move violates the rules of the game
    #[error("illegal move {0:?}: {1}")]
    IllegalMove(IllegalMoveKind, String),
    /// Index, position or column outside the valid bounds
    #[error("out of range: index {index} not in 0..{len}")]
    OutOfRange { index: usize, len: usize },
    /// Action not valid in the current stage of a staged game
    #[error("invalid stage transition: {0}")]
    InvalidStageTransition(String),
    /// Referenced card or player is not where it was expected
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Card token could not be parsed
    #[error("parse card: {0}")]
    ParseCard(String),
    /// Engine was set up with impossible parameters
    #[error("configuration error: {0}")]
    Config(String),
}

impl GameError {
    pub fn illegal(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove(kind, detail.into())
    }
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
    pub fn stage(detail: impl Into<String>) -> Self {
        Self::InvalidStageTransition(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn parse_card(token: impl Into<String>) -> Self {
        Self::ParseCard(token.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::IllegalMove(kind, _) => match kind {
                IllegalMoveKind::OutOfTurn => ErrorCode::OutOfTurn,
                IllegalMoveKind::CellOccupied => ErrorCode::CellOccupied,
                IllegalMoveKind::ColumnFull => ErrorCode::ColumnFull,
                IllegalMoveKind::GameOver => ErrorCode::GameOver,
                IllegalMoveKind::MustFollowSuit => ErrorCode::MustFollowSuit,
                IllegalMoveKind::TrickFull => ErrorCode::TrickFull,
                IllegalMoveKind::TrickIncomplete => ErrorCode::TrickIncomplete,
                IllegalMoveKind::TrickInProgress => ErrorCode::TrickInProgress,
                IllegalMoveKind::PileEmpty => ErrorCode::PileEmpty,
                IllegalMoveKind::RoundOver => ErrorCode::RoundOver,
            },
            GameError::OutOfRange { .. } => ErrorCode::OutOfRange,
            GameError::InvalidStageTransition(_) => ErrorCode::InvalidStageTransition,
            GameError::NotFound(kind, _) => match kind {
                NotFoundKind::Card => ErrorCode::CardNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
            },
            GameError::ParseCard(_) => ErrorCode::ParseCard,
            GameError::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// True for rule violations, as opposed to bad indices or missing items.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove(..))
    }
}

//! Error codes surfaced to callers of the engines.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes for the arcade engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rule violations
    /// Not this player's turn
    OutOfTurn,
    /// Grid cell already holds a mark
    CellOccupied,
    /// Connect Four column has no empty row
    ColumnFull,
    /// Game already finished
    GameOver,
    /// Must follow suit
    MustFollowSuit,
    /// Trick already holds one card per player
    TrickFull,
    /// Trick cannot be resolved yet
    TrickIncomplete,
    /// Action requires an empty trick
    TrickInProgress,
    /// Pile has no cards left
    PileEmpty,
    /// Round already scored
    RoundOver,

    // Bounds
    /// Index outside the valid range
    OutOfRange,

    // Staging
    /// Action not allowed in the current stage
    InvalidStageTransition,

    // Lookups
    /// Card not present in the expected collection
    CardNotFound,
    /// Player id not seated at this table
    PlayerNotFound,

    // Input and setup
    /// Card token could not be parsed
    ParseCard,
    /// Invalid engine configuration
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 16] = [
        Self::OutOfTurn,
        Self::CellOccupied,
        Self::ColumnFull,
        Self::GameOver,
        Self::MustFollowSuit,
        Self::TrickFull,
        Self::TrickIncomplete,
        Self::TrickInProgress,
        Self::PileEmpty,
        Self::RoundOver,
        Self::OutOfRange,
        Self::InvalidStageTransition,
        Self::CardNotFound,
        Self::PlayerNotFound,
        Self::ParseCard,
        Self::ConfigError,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            // Rule violations
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::CellOccupied => "CELL_OCCUPIED",
            Self::ColumnFull => "COLUMN_FULL",
            Self::GameOver => "GAME_OVER",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::TrickFull => "TRICK_FULL",
            Self::TrickIncomplete => "TRICK_INCOMPLETE",
            Self::TrickInProgress => "TRICK_IN_PROGRESS",
            Self::PileEmpty => "PILE_EMPTY",
            Self::RoundOver => "ROUND_OVER",

            // Bounds
            Self::OutOfRange => "OUT_OF_RANGE",

            // Staging
            Self::InvalidStageTransition => "INVALID_STAGE_TRANSITION",

            // Lookups
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            // Input and setup
            Self::ParseCard => "PARSE_CARD",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Error handling for the arcade engines.

pub mod error_code;
pub mod game;

pub use error_code::ErrorCode;
pub use game::{GameError, IllegalMoveKind, NotFoundKind};

//! Two-player trick-taking Whist: Deal -> Draft -> Duel, trump precedence,
//! prize-card drafting and baseline scoring.

pub mod game;
pub mod scoring;
pub mod state;
pub mod tricks;

pub use game::{PileKind, WhistGame};
pub use state::{Stage, TrickOutcome, WhistRoundState, PLAYERS};

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;


pub use config::{rng_seed_from_env, ShufflePlan, WhistRules};
pub use domain::grid::{ConnectFour, GridGame, GridKind, GridStatus, Mark, TicTacToe};
pub use domain::snapshot::{GridSnapshot, WhistSnapshot};
pub use domain::whist::{PileKind, Stage, TrickOutcome, WhistGame};
pub use domain::{Card, CardPile, Participant, ParticipantId, Rank, Seat, ShuffleKind, Suit};
pub use errors::{ErrorCode, GameError, IllegalMoveKind, NotFoundKind};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

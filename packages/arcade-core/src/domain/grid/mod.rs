//! Two-player grid games sharing one engine: Tic-Tac-Toe and Connect Four.

pub mod board;
pub mod connect_four;
pub mod tic_tac_toe;

pub use board::{GridGame, GridKind, GridStatus, Mark};
pub use connect_four::ConnectFour;
pub use tic_tac_toe::TicTacToe;

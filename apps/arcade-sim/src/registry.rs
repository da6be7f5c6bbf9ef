//! Games the simulator knows how to play.
//!
//! To add a game, give it a `play_*` function in `simulator` and a
//! `GameFactory` entry below. Keep names stable; they appear in output files.

use arcade_core::GameError;

use crate::simulator::{play_connect_four, play_tic_tac_toe, play_whist, GameResult};

pub struct GameFactory {
    pub name: &'static str,
    /// Play one complete game (a whole match for Whist) from `seed`.
    pub play: fn(seed: u64) -> Result<GameResult, GameError>,
}

static GAME_FACTORIES: &[GameFactory] = &[
    GameFactory {
        name: "tic-tac-toe",
        play: play_tic_tac_toe,
    },
    GameFactory {
        name: "connect-four",
        play: play_connect_four,
    },
    GameFactory {
        name: "whist",
        play: play_whist,
    },
];

pub fn registered_games() -> &'static [GameFactory] {
    GAME_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static GameFactory> {
    registered_games().iter().find(|factory| factory.name == name)
}

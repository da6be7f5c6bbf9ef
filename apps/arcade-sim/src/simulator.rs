//! Plays games to completion with uniformly random legal moves.

use arcade_core::{
    ConnectFour, GameError, Participant, ParticipantId, TicTacToe, WhistGame, WhistRules,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde_json::Value;
use tracing::debug;

/// Rounds after which a Whist match is abandoned as stuck.
const MAX_WHIST_ROUNDS: u32 = 64;

#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: Option<ParticipantId>,
    pub moves_played: u32,
    /// Whist rounds played; 1 for the grid games.
    pub rounds: u32,
    pub final_snapshot: Value,
}

fn players() -> [Participant; 2] {
    [Participant::new(1, "first"), Participant::new(2, "second")]
}

fn to_json<T: serde::Serialize>(snapshot: &T) -> Value {
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}

fn pick<T: Copy, R: Rng>(rng: &mut R, options: &[T]) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    Some(options[rng.random_range(0..options.len())])
}

pub fn play_tic_tac_toe(seed: u64) -> Result<GameResult, GameError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut game = TicTacToe::new(players())?;
    while let Some(position) = pick(&mut rng, &game.legal_moves()) {
        let player = game.current_player().id;
        game.place(player, position)?;
    }
    Ok(GameResult {
        winner: game.winner().map(|p| p.id),
        moves_played: game.moves_played(),
        rounds: 1,
        final_snapshot: to_json(&game.snapshot()),
    })
}

pub fn play_connect_four(seed: u64) -> Result<GameResult, GameError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut game = ConnectFour::new(players())?;
    while let Some(column) = pick(&mut rng, &game.legal_moves()) {
        let player = game.current_player().id;
        game.drop(player, column)?;
    }
    Ok(GameResult {
        winner: game.winner().map(|p| p.id),
        moves_played: game.moves_played(),
        rounds: 1,
        final_snapshot: to_json(&game.snapshot()),
    })
}

/// A whole match under the default rules.
pub fn play_whist(seed: u64) -> Result<GameResult, GameError> {
    let mut game = WhistGame::with_seed(players().to_vec(), WhistRules::default(), seed)?;
    let mut chooser = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
    let mut moves = 0u32;

    loop {
        game.deal_round()?;
        while !game.is_round_over() {
            let card = pick(&mut chooser, &game.legal_plays())
                .ok_or_else(|| GameError::stage("player to move holds no legal card"))?;
            if game.play_card(card)? {
                game.complete_trick()?;
            }
            moves += 1;
        }
        debug!(round = game.round_no(), "simulated round finished");

        if game.match_winner().is_some() {
            break;
        }
        if game.round_no() >= MAX_WHIST_ROUNDS {
            return Err(GameError::stage(format!(
                "match undecided after {MAX_WHIST_ROUNDS} rounds"
            )));
        }
        game.start_next_round()?;
    }

    Ok(GameResult {
        winner: game.match_winner().map(|p| p.id),
        moves_played: moves,
        rounds: game.round_no(),
        final_snapshot: to_json(&game.snapshot()),
    })
}

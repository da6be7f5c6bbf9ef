//! Per-game records written by the simulator.

use serde::Serialize;
use serde_json::Value;

use crate::simulator::GameResult;

#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub game: String,
    pub total_games: u32,
    pub result: GameResultMetrics,
    pub final_snapshot: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    /// Participant id of the winner; `None` for a drawn grid game.
    pub winner: Option<i64>,
    pub moves_played: u32,
    pub rounds: u32,
    pub duration_ms: f64,
}

/// Flat row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub game: String,
    pub winner: String,
    pub moves_played: u32,
    pub rounds: u32,
    pub duration_ms: f64,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_id: m.game_id,
            seed: m.seed,
            game: m.game.clone(),
            winner: m
                .result
                .winner
                .map_or_else(|| "draw".to_string(), |id| id.to_string()),
            moves_played: m.result.moves_played,
            rounds: m.result.rounds,
            duration_ms: m.result.duration_ms,
        }
    }
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    game: &str,
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    GameMetrics {
        game_id,
        seed,
        timestamp,
        game: game.to_string(),
        total_games,
        result: GameResultMetrics {
            winner: result.winner.map(|id| id.0),
            moves_played: result.moves_played,
            rounds: result.rounds,
            duration_ms,
        },
        final_snapshot: result.final_snapshot.clone(),
    }
}

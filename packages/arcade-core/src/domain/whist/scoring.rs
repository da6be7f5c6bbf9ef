use tracing::info;

use crate::config::WhistRules;
use crate::domain::participant::Seat;
use crate::domain::whist::state::{WhistRoundState, PLAYERS};

/// Points for a round: Duel tricks above the baseline, never negative.
pub fn round_points(tricks_won: u8, baseline: u8) -> u32 {
    u32::from(tricks_won.saturating_sub(baseline))
}

/// The seat that has reached `target`, if exactly one leads at or above it.
pub fn match_winner(scores: &[u32; PLAYERS], target: u32) -> Option<Seat> {
    let best = scores.iter().copied().max()?;
    if best < target {
        return None;
    }
    let mut leaders = scores.iter().enumerate().filter(|&(_, &s)| s == best);
    let (seat, _) = leaders.next()?;
    if leaders.next().is_some() {
        return None;
    }
    Some(seat as Seat)
}

/// Add this round's points to the cumulative scores and settle the match.
pub fn apply_round_scoring(state: &mut WhistRoundState, rules: &WhistRules) -> [u32; PLAYERS] {
    let mut points = [0u32; PLAYERS];
    for (seat, p) in points.iter_mut().enumerate() {
        *p = round_points(state.tricks_won[seat], rules.trick_baseline);
        state.scores[seat] += *p;
    }
    state.round_scored = true;
    state.match_winner = match_winner(&state.scores, rules.match_target);
    info!(
        round = state.round_no,
        tricks = ?state.tricks_won,
        points = ?points,
        scores = ?state.scores,
        "round scored"
    );
    if let Some(winner) = state.match_winner {
        info!(winner, scores = ?state.scores, "match won");
    }
    points
}

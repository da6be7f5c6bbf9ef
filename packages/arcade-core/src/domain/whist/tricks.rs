use tracing::{debug, info};

use crate::config::WhistRules;
use crate::domain::participant::{next_seat, Seat};
use crate::domain::whist::scoring::apply_round_scoring;
use crate::domain::whist::state::{Stage, TrickOutcome, WhistRoundState, PLAYERS};
use crate::domain::{hand_has_suit, playable_cards, trick_winner_index, Card};
use crate::errors::{GameError, IllegalMoveKind, NotFoundKind};

/// Move to the next stage. Leaving Deal needs trump turned and two equal,
/// non-empty hands; leaving Draft needs an empty trick. A Duel entered with
/// nothing left to play is scored at once.
pub fn advance_stage(state: &mut WhistRoundState, rules: &WhistRules) -> Result<Stage, GameError> {
    let Some(next) = state.stage.next() else {
        return Err(GameError::stage("no stage follows Duel"));
    };
    match state.stage {
        Stage::Deal if state.trump.is_none() => {
            return Err(GameError::stage("trump must be turned before drafting"));
        }
        Stage::Deal if !state.hands_dealt() => {
            return Err(GameError::stage("both hands must be dealt evenly before drafting"));
        }
        Stage::Draft if !state.trick.is_empty() => {
            return Err(GameError::illegal(
                IllegalMoveKind::TrickInProgress,
                "Finish the current trick first",
            ));
        }
        _ => {}
    }
    state.stage = next;
    info!(round = state.round_no, stage = ?next, "stage advanced");
    if next == Stage::Duel && !state.round_scored && state.hands.iter().all(Vec::is_empty) {
        apply_round_scoring(state, rules);
    }
    Ok(next)
}

/// Compute legal cards the seat may play, independent of turn enforcement.
pub fn legal_moves(state: &WhistRoundState, seat: Seat) -> Vec<Card> {
    if !state.stage.is_trick_stage() || state.round_scored || state.trick_is_full() {
        return Vec::new();
    }
    let mut v = playable_cards(&state.hands[seat as usize], state.lead_card());
    v.sort();
    v
}

/// Play a card from the hand of the seat to move into the current trick.
///
/// Returns whether the trick now holds one card per player.
pub fn play_card(state: &mut WhistRoundState, card: Card) -> Result<bool, GameError> {
    state.require_stage(&[Stage::Draft, Stage::Duel], "play a card")?;
    if state.round_scored {
        return Err(GameError::illegal(
            IllegalMoveKind::RoundOver,
            "Round already scored",
        ));
    }
    if state.trick_is_full() {
        return Err(GameError::illegal(
            IllegalMoveKind::TrickFull,
            "Trick awaits completion",
        ));
    }

    let who = state.turn;
    let Some(pos) = state.hands[who as usize].iter().position(|&c| c == card) else {
        return Err(GameError::not_found(
            NotFoundKind::Card,
            format!("{card} not in hand"),
        ));
    };

    if let Some(lead) = state.lead_card() {
        if card.suit != lead.suit && hand_has_suit(&state.hands[who as usize], lead.suit) {
            return Err(GameError::illegal(
                IllegalMoveKind::MustFollowSuit,
                "Must follow suit",
            ));
        }
    }

    let played = state.hands[who as usize].remove(pos).face_up();
    state.trick.push((who, played));
    state.turn = next_seat(who, PLAYERS);
    debug!(seat = who, card = %played, stage = ?state.stage, "card played");

    Ok(state.trick_is_full())
}

/// Seat currently controlling the trick, `None` while it is empty.
pub fn resolve_current_trick(state: &WhistRoundState) -> Option<Seat> {
    let cards: Vec<Card> = state.trick.iter().map(|&(_, c)| c).collect();
    let idx = trick_winner_index(&cards, state.trump)?;
    Some(state.trick[idx].0)
}

/// Resolve a full trick: discard its cards, hand the lead to the winner,
/// award prizes while drafting, and score the round once the Duel is done.
pub fn complete_trick(
    state: &mut WhistRoundState,
    rules: &WhistRules,
) -> Result<TrickOutcome, GameError> {
    state.require_stage(&[Stage::Draft, Stage::Duel], "complete a trick")?;
    if !state.trick_is_full() {
        return Err(GameError::illegal(
            IllegalMoveKind::TrickIncomplete,
            format!("Trick holds {} of {PLAYERS} cards", state.trick.len()),
        ));
    }
    if state.stage == Stage::Draft && state.draw_pile.size() < PLAYERS {
        return Err(GameError::illegal(
            IllegalMoveKind::PileEmpty,
            "Stock cannot cover the prizes",
        ));
    }
    let winner = resolve_current_trick(state).ok_or_else(|| {
        GameError::illegal(IllegalMoveKind::TrickIncomplete, "Trick is empty")
    })?;
    let loser = next_seat(winner, PLAYERS);
    let stage = state.stage;

    let plays = std::mem::take(&mut state.trick);
    state.discard_pile.add_cards(plays.iter().map(|&(_, c)| c));
    state.turn = winner;
    info!(winner, stage = ?stage, round = state.round_no, "trick won");

    let mut outcome = TrickOutcome {
        stage,
        winner,
        plays,
        prizes: None,
        round_points: None,
        stage_after: stage,
    };

    if stage == Stage::Draft {
        // Checked above: the stock holds at least one card per player.
        let won = state.draw_pile.draw()?.face_up();
        let consolation = state.draw_pile.draw()?.face_up();
        state.hands[winner as usize].push(won);
        state.hands[loser as usize].push(consolation);
        outcome.prizes = Some((won, consolation));

        match state.draw_pile.top_card_mut() {
            Some(next_prize) => next_prize.face_down = false,
            None => {
                state.stage = Stage::Duel;
                info!(round = state.round_no, "stock exhausted, duel begins");
            }
        }
    } else {
        state.tricks_won[winner as usize] += 1;
        if state.hands.iter().all(Vec::is_empty) {
            outcome.round_points = Some(apply_round_scoring(state, rules));
        }
    }

    outcome.stage_after = state.stage;
    Ok(outcome)
}

//! Whist engine: owns the seated players, the rules, the RNG and the round state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::WhistRules;
use crate::domain::participant::{next_seat, require_distinct, seat_of, Participant, ParticipantId, Seat};
use crate::domain::snapshot::WhistSnapshot;
use crate::domain::whist::state::{Stage, TrickOutcome, WhistRoundState, PLAYERS};
use crate::domain::whist::tricks;
use crate::domain::{compare_cards, playable_cards, Card, CardPile, Suit};
use crate::errors::{GameError, IllegalMoveKind};

/// Piles a card can be dealt from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PileKind {
    Draw,
    Discard,
}

#[derive(Debug, Clone)]
pub struct WhistGame<R = ChaCha20Rng> {
    players: [Participant; PLAYERS],
    rules: WhistRules,
    rng: R,
    state: WhistRoundState,
}

impl WhistGame<ChaCha20Rng> {
    /// Engine whose deals are reproducible for a given seed.
    pub fn with_seed(
        players: Vec<Participant>,
        rules: WhistRules,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::new(players, rules, ChaCha20Rng::seed_from_u64(seed))
    }

    /// Engine seeded from operating-system entropy.
    pub fn from_os_rng(players: Vec<Participant>, rules: WhistRules) -> Result<Self, GameError> {
        Self::new(players, rules, ChaCha20Rng::from_os_rng())
    }
}

impl<R: Rng> WhistGame<R> {
    pub fn new(players: Vec<Participant>, rules: WhistRules, rng: R) -> Result<Self, GameError> {
        rules.validate()?;
        let players: [Participant; PLAYERS] = players.try_into().map_err(|v: Vec<_>| {
            GameError::config(format!(
                "Whist needs exactly {PLAYERS} players, got {}",
                v.len()
            ))
        })?;
        require_distinct(&players)?;
        Ok(Self {
            players,
            rules,
            rng,
            state: WhistRoundState::initial(),
        })
    }

    pub fn players(&self) -> &[Participant; PLAYERS] {
        &self.players
    }

    pub fn rules(&self) -> &WhistRules {
        &self.rules
    }

    pub fn state(&self) -> &WhistRoundState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn round_no(&self) -> u32 {
        self.state.round_no
    }

    pub fn trump(&self) -> Option<Suit> {
        self.state.trump
    }

    pub fn trick(&self) -> &[(Seat, Card)] {
        &self.state.trick
    }

    pub fn draw_pile(&self) -> &CardPile {
        &self.state.draw_pile
    }

    pub fn discard_pile(&self) -> &CardPile {
        &self.state.discard_pile
    }

    pub fn prize_card(&self) -> Option<&Card> {
        self.state.prize_card()
    }

    pub fn current_player(&self) -> &Participant {
        &self.players[self.state.turn as usize]
    }

    pub fn dealer(&self) -> &Participant {
        &self.players[self.state.dealer as usize]
    }

    pub fn hand(&self, player: ParticipantId) -> Result<&[Card], GameError> {
        let seat = seat_of(&self.players, player)?;
        Ok(&self.state.hands[seat as usize])
    }

    pub fn score(&self, player: ParticipantId) -> Result<u32, GameError> {
        let seat = seat_of(&self.players, player)?;
        Ok(self.state.scores[seat as usize])
    }

    pub fn tricks_won(&self, player: ParticipantId) -> Result<u8, GameError> {
        let seat = seat_of(&self.players, player)?;
        Ok(self.state.tricks_won[seat as usize])
    }

    pub fn is_round_over(&self) -> bool {
        self.state.round_scored
    }

    pub fn match_winner(&self) -> Option<&Participant> {
        self.state.match_winner.map(|s| &self.players[s as usize])
    }

    /// Advance Deal -> Draft -> Duel. There is no stage after Duel.
    pub fn next_stage(&mut self) -> Result<Stage, GameError> {
        tricks::advance_stage(&mut self.state, &self.rules)
    }

    /// Apply the configured shuffle plan to the stock.
    pub fn shuffle_stock(&mut self) -> Result<(), GameError> {
        self.state.require_stage(&[Stage::Deal], "shuffle")?;
        for &kind in &self.rules.shuffle.0 {
            self.state.draw_pile.shuffle(kind, &mut self.rng);
        }
        Ok(())
    }

    /// Move a specific card from `source` into the hand of `player`.
    pub fn deal_card(
        &mut self,
        source: PileKind,
        card: &Card,
        player: ParticipantId,
    ) -> Result<(), GameError> {
        self.state.require_stage(&[Stage::Deal], "deal")?;
        let seat = seat_of(&self.players, player)?;
        self.move_to_hand(source, card, seat)
    }

    fn move_to_hand(&mut self, source: PileKind, card: &Card, seat: Seat) -> Result<(), GameError> {
        let pile = match source {
            PileKind::Draw => &mut self.state.draw_pile,
            PileKind::Discard => &mut self.state.discard_pile,
        };
        let taken = pile.take_card(card)?.face_up();
        self.state.hands[seat as usize].push(taken);
        debug!(seat, card = %taken, ?source, "card dealt");
        Ok(())
    }

    /// Turn the top stock card face up; its suit is trump for the round.
    pub fn turn_trump(&mut self) -> Result<Suit, GameError> {
        self.state.require_stage(&[Stage::Deal], "turn trump")?;
        if self.state.trump.is_some() {
            return Err(GameError::stage("trump already turned this round"));
        }
        let Some(indicator) = self.state.draw_pile.top_card_mut() else {
            return Err(GameError::illegal(
                IllegalMoveKind::PileEmpty,
                "No stock card to turn",
            ));
        };
        indicator.face_down = false;
        let suit = indicator.suit;
        self.state.trump = Some(suit);
        info!(round = self.state.round_no, trump = ?suit, "trump turned");
        Ok(suit)
    }

    /// Shuffle, deal `hand_size` cards each alternately starting left of
    /// the dealer, turn trump and advance to Draft.
    pub fn deal_round(&mut self) -> Result<Suit, GameError> {
        self.state.require_stage(&[Stage::Deal], "deal a round")?;
        if self.state.trump.is_some() || self.state.hands.iter().any(|h| !h.is_empty()) {
            return Err(GameError::stage("round already dealt"));
        }
        let needed = usize::from(self.rules.hand_size) * PLAYERS + PLAYERS;
        if self.state.draw_pile.size() < needed {
            return Err(GameError::illegal(
                IllegalMoveKind::PileEmpty,
                format!("Stock holds {} cards, {needed} needed", self.state.draw_pile.size()),
            ));
        }

        self.shuffle_stock()?;
        let mut seat = next_seat(self.state.dealer, PLAYERS);
        for _ in 0..usize::from(self.rules.hand_size) * PLAYERS {
            let card = *self.state.draw_pile.top_card()?;
            self.move_to_hand(PileKind::Draw, &card, seat)?;
            seat = next_seat(seat, PLAYERS);
        }
        for hand in &mut self.state.hands {
            hand.sort();
        }
        let trump = self.turn_trump()?;
        self.next_stage()?;
        Ok(trump)
    }

    /// Cards `player` may play against `lead`: the lead suit when held,
    /// otherwise the whole hand.
    pub fn playable_cards(
        &self,
        player: ParticipantId,
        lead: Option<&Card>,
    ) -> Result<Vec<Card>, GameError> {
        let seat = seat_of(&self.players, player)?;
        Ok(playable_cards(&self.state.hands[seat as usize], lead))
    }

    /// Legal cards for the player to move in the current trick.
    pub fn legal_plays(&self) -> Vec<Card> {
        tricks::legal_moves(&self.state, self.state.turn)
    }

    /// Play `card` for the player to move. Returns whether the trick is full.
    pub fn play_card(&mut self, card: Card) -> Result<bool, GameError> {
        tricks::play_card(&mut self.state, card).inspect_err(|e| {
            debug!(seat = self.state.turn, %card, code = %e.code(), "play rejected");
        })
    }

    /// Like [`play_card`](Self::play_card), but rejects an actor who is not on turn.
    pub fn play_card_for(&mut self, player: ParticipantId, card: Card) -> Result<bool, GameError> {
        let seat = seat_of(&self.players, player)?;
        if seat != self.state.turn {
            debug!(%player, %card, "play out of turn rejected");
            return Err(GameError::illegal(IllegalMoveKind::OutOfTurn, "Out of turn"));
        }
        self.play_card(card)
    }

    /// Winner between two cards under this round's trump and the current lead.
    pub fn compare_cards(&self, a: Card, b: Card) -> Option<Card> {
        compare_cards(a, b, self.state.lead_card().map(|c| c.suit), self.state.trump)
    }

    /// Player controlling the cards currently in the trick.
    pub fn trick_winner(&self) -> Option<&Participant> {
        tricks::resolve_current_trick(&self.state).map(|s| &self.players[s as usize])
    }

    pub fn complete_trick(&mut self) -> Result<TrickOutcome, GameError> {
        tricks::complete_trick(&mut self.state, &self.rules)
    }

    /// Begin the next round after a scored round of an undecided match.
    pub fn start_next_round(&mut self) -> Result<(), GameError> {
        if !self.state.round_scored {
            return Err(GameError::stage("current round is not finished"));
        }
        if self.state.match_winner.is_some() {
            return Err(GameError::stage("match is already decided"));
        }
        let round_no = self.state.round_no + 1;
        let dealer = next_seat(self.state.dealer, PLAYERS);
        self.state = WhistRoundState::for_round(round_no, dealer, self.state.scores);
        info!(round = round_no, dealer, "round started");
        Ok(())
    }

    /// Back to round 1, Deal stage, zero scores. Players and rules stay.
    pub fn reset(&mut self) {
        self.state = WhistRoundState::initial();
    }

    pub fn snapshot(&self) -> WhistSnapshot {
        let id = |seat: Seat| self.players[seat as usize].id;
        WhistSnapshot {
            stage: self.state.stage,
            round_no: self.state.round_no,
            trump: self.state.trump,
            prize_card: self.state.prize_card().copied(),
            trick: self.state.trick.iter().map(|&(s, c)| (id(s), c)).collect(),
            draw_pile_size: self.state.draw_pile.size(),
            discard_pile_size: self.state.discard_pile.size(),
            hand_sizes: self.state.hands.iter().map(Vec::len).collect(),
            tricks_won: self.state.tricks_won.to_vec(),
            scores: self.state.scores.to_vec(),
            players: self.players.iter().map(|p| p.id).collect(),
            turn: id(self.state.turn),
            dealer: id(self.state.dealer),
            round_over: self.state.round_scored,
            match_winner: self.state.match_winner.map(id),
        }
    }
}

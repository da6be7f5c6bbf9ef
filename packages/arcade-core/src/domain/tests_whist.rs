use crate::config::WhistRules;
use crate::domain::whist::tricks::{advance_stage, complete_trick, play_card, resolve_current_trick};
use crate::domain::whist::{PileKind, Stage, WhistGame, WhistRoundState, PLAYERS};
use crate::domain::{hand_has_suit, Card, CardPile, Participant, ParticipantId, Suit};
use crate::errors::{ErrorCode, GameError, NotFoundKind};

const ALICE: ParticipantId = ParticipantId(1);
const BOB: ParticipantId = ParticipantId(2);

fn card(s: &str) -> Card {
    s.parse().expect("hardcoded valid card token")
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}

fn players() -> Vec<Participant> {
    vec![Participant::new(1, "alice"), Participant::new(2, "bob")]
}

fn seeded(seed: u64) -> WhistGame {
    WhistGame::with_seed(players(), WhistRules::default(), seed).unwrap()
}

/// Face-down stock with its top card turned up, as while drafting.
fn stock(tokens: &[&str]) -> CardPile {
    let mut pile: Vec<Card> = cards(tokens).into_iter().map(Card::turned_down).collect();
    if let Some(top) = pile.first_mut() {
        top.face_down = false;
    }
    CardPile::from_cards(pile)
}

fn state_in(stage: Stage, trump: Suit, seat0: &[&str], seat1: &[&str]) -> WhistRoundState {
    let mut state = WhistRoundState::initial();
    state.stage = stage;
    state.trump = Some(trump);
    state.draw_pile = CardPile::empty();
    state.hands = [cards(seat0), cards(seat1)];
    state
}

/// Play the current round to the end with the first legal card each time.
/// Returns (draft tricks, duel tricks).
fn play_out_round(game: &mut WhistGame) -> (usize, usize) {
    let (mut draft, mut duel) = (0, 0);
    while !game.is_round_over() {
        while game.trick().len() < PLAYERS {
            let legal = game.legal_plays();
            if let Some(&(_, lead)) = game.trick().first() {
                let hand = game.hand(game.current_player().id).unwrap();
                if hand_has_suit(hand, lead.suit) {
                    assert!(legal.iter().all(|c| c.suit == lead.suit));
                }
            }
            game.play_card(legal[0]).unwrap();
        }
        let outcome = game.complete_trick().unwrap();
        match outcome.stage {
            Stage::Draft => draft += 1,
            Stage::Duel => duel += 1,
            Stage::Deal => unreachable!("no tricks while dealing"),
        }
    }
    (draft, duel)
}

// Construction

#[test]
fn fresh_game_waits_in_deal() {
    let game = seeded(1);
    assert_eq!(game.stage(), Stage::Deal);
    assert_eq!(game.round_no(), 1);
    assert_eq!(game.trump(), None);
    assert_eq!(game.draw_pile().size(), 52);
    assert!(game.draw_pile().iter().all(|c| c.face_down));
    assert!(game.discard_pile().is_empty());
    assert_eq!(game.dealer().id, ALICE);
    assert_eq!(game.current_player().id, BOB);
    assert_eq!(game.prize_card(), None);
    assert_eq!(game.score(ALICE).unwrap(), 0);
}

#[test]
fn exactly_two_distinct_players() {
    let three = vec![
        Participant::new(1, "a"),
        Participant::new(2, "b"),
        Participant::new(3, "c"),
    ];
    let err = WhistGame::with_seed(three, WhistRules::default(), 0).err().unwrap();
    assert_eq!(err.code(), ErrorCode::ConfigError);

    let one = vec![Participant::new(1, "a")];
    assert!(WhistGame::with_seed(one, WhistRules::default(), 0).is_err());

    let twins = vec![Participant::new(1, "a"), Participant::new(1, "b")];
    assert!(WhistGame::with_seed(twins, WhistRules::default(), 0).is_err());

    let rules = WhistRules {
        hand_size: 0,
        ..WhistRules::default()
    };
    assert!(WhistGame::with_seed(players(), rules, 0).is_err());
}

#[test]
fn unknown_player_is_not_found() {
    let game = seeded(1);
    assert!(matches!(
        game.hand(ParticipantId(9)),
        Err(GameError::NotFound(NotFoundKind::Player, _))
    ));
    assert_eq!(
        game.score(ParticipantId(9)).unwrap_err().code(),
        ErrorCode::PlayerNotFound
    );
}

// Stage machine

#[test]
fn stages_advance_in_order_and_stop_at_duel() {
    let mut game = seeded(1);
    let err = game.next_stage().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStageTransition);

    // New Deck Order: the Ace of spades is on top.
    assert_eq!(game.turn_trump().unwrap(), Suit::Spades);
    assert_eq!(game.turn_trump().unwrap_err().code(), ErrorCode::InvalidStageTransition);
    assert!(!game.draw_pile().top_card().unwrap().face_down);

    game.deal_card(PileKind::Draw, &card("KD"), ALICE).unwrap();
    game.deal_card(PileKind::Draw, &card("QD"), BOB).unwrap();
    assert_eq!(game.next_stage().unwrap(), Stage::Draft);
    assert_eq!(game.prize_card(), Some(&card("AS")));
    assert_eq!(game.next_stage().unwrap(), Stage::Duel);
    assert_eq!(game.prize_card(), None);
    assert!(!game.is_round_over());
    assert_eq!(game.legal_plays(), vec![card("QD")]);

    let err = game.next_stage().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStageTransition);
    assert_eq!(game.stage(), Stage::Duel);
}

#[test]
fn undealt_hands_cannot_leave_deal() {
    let mut game = seeded(1);
    game.turn_trump().unwrap();
    let err = game.next_stage().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStageTransition);
    assert_eq!(game.stage(), Stage::Deal);

    game.deal_card(PileKind::Draw, &card("KD"), ALICE).unwrap();
    let err = game.next_stage().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStageTransition);
    assert_eq!(game.stage(), Stage::Deal);

    // Evening the hands lets the round go on.
    game.deal_card(PileKind::Draw, &card("QD"), BOB).unwrap();
    assert_eq!(game.next_stage().unwrap(), Stage::Draft);
}

#[test]
fn duel_entered_with_empty_hands_is_scored() {
    let rules = WhistRules::default();
    let mut state = state_in(Stage::Draft, Suit::Hearts, &[], &[]);
    assert_eq!(advance_stage(&mut state, &rules).unwrap(), Stage::Duel);
    assert!(state.round_scored);
    assert_eq!(state.scores, [0, 0]);
    assert_eq!(state.match_winner, None);

    let mut lopsided = state_in(Stage::Deal, Suit::Hearts, &["AS"], &[]);
    let err = advance_stage(&mut lopsided, &rules).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStageTransition);
    assert_eq!(lopsided.stage, Stage::Deal);
}

#[test]
fn leaving_draft_needs_an_empty_trick() {
    let mut game = seeded(3);
    game.deal_round().unwrap();
    let lead = game.legal_plays()[0];
    game.play_card(lead).unwrap();
    assert_eq!(game.next_stage().unwrap_err().code(), ErrorCode::TrickInProgress);
    assert_eq!(game.stage(), Stage::Draft);
}

// Dealing

#[test]
fn deal_card_moves_named_card_into_hand() {
    let mut game = seeded(1);
    game.deal_card(PileKind::Draw, &card("QD"), ALICE).unwrap();
    assert_eq!(game.hand(ALICE).unwrap(), &[card("QD")]);
    assert!(!game.hand(ALICE).unwrap()[0].face_down);
    assert_eq!(game.draw_pile().size(), 51);
    assert!(!game.draw_pile().contains(&card("QD")));

    let err = game.deal_card(PileKind::Draw, &card("QD"), BOB).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CardNotFound);
    let err = game.deal_card(PileKind::Discard, &card("2C"), BOB).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CardNotFound);
    let err = game.deal_card(PileKind::Draw, &card("2C"), ParticipantId(7)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotFound);
}

#[test]
fn deal_round_gives_each_player_a_hand_and_turns_trump() {
    let mut game = seeded(42);
    let trump = game.deal_round().unwrap();

    assert_eq!(game.stage(), Stage::Draft);
    assert_eq!(game.trump(), Some(trump));
    assert_eq!(game.hand(ALICE).unwrap().len(), 13);
    assert_eq!(game.hand(BOB).unwrap().len(), 13);
    assert_eq!(game.draw_pile().size(), 26);

    let prize = *game.prize_card().unwrap();
    assert_eq!(prize.suit, trump);
    assert!(!prize.face_down);
    assert!(game.draw_pile().iter().skip(1).all(|c| c.face_down));

    // non-dealer leads
    assert_eq!(game.current_player().id, BOB);

    let mut all: Vec<Card> = game.hand(ALICE).unwrap().to_vec();
    all.extend_from_slice(game.hand(BOB).unwrap());
    all.extend(game.draw_pile().iter().copied());
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 52);
}

#[test]
fn deal_round_only_once_per_round() {
    let mut game = seeded(42);
    game.deal_round().unwrap();
    assert_eq!(game.deal_round().unwrap_err().code(), ErrorCode::InvalidStageTransition);

    let mut manual = seeded(42);
    manual.deal_card(PileKind::Draw, &card("AS"), ALICE).unwrap();
    assert_eq!(manual.deal_round().unwrap_err().code(), ErrorCode::InvalidStageTransition);
}

#[test]
fn same_seed_same_deal() {
    let mut a = seeded(7);
    let mut b = seeded(7);
    a.deal_round().unwrap();
    b.deal_round().unwrap();
    assert_eq!(a.hand(ALICE).unwrap(), b.hand(ALICE).unwrap());
    assert_eq!(a.draw_pile(), b.draw_pile());
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn snapshot_serializes_public_state() {
    let mut game = seeded(5);
    game.deal_round().unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["stage"], "Draft");
    assert_eq!(json["draw_pile_size"], 26);
    assert_eq!(json["hand_sizes"], serde_json::json!([13, 13]));
    assert_eq!(json["turn"], 2);
    assert_eq!(json["dealer"], 1);
    assert!(json["prize_card"].is_string());
}

// Card comparison and legality

#[test]
fn compare_cards_uses_round_trump() {
    let mut game = seeded(1);
    assert_eq!(game.compare_cards(card("9S"), card("8S")), Some(card("9S")));

    // Deal away the spades so the King of hearts is turned for trump.
    for rank in ["A", "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K"] {
        let c = card(&format!("{rank}S"));
        game.deal_card(PileKind::Draw, &c, ALICE).unwrap();
    }
    assert_eq!(game.turn_trump().unwrap(), Suit::Hearts);
    assert_eq!(game.compare_cards(card("8H"), card("9S")), Some(card("8H")));
    assert_eq!(game.compare_cards(card("9S"), card("8S")), Some(card("9S")));
    assert_eq!(game.compare_cards(card("AS"), card("2H")), Some(card("2H")));
}

#[test]
fn playable_cards_follow_the_lead() {
    let mut game = seeded(11);
    game.deal_round().unwrap();
    let alice_hand = game.hand(ALICE).unwrap().to_vec();
    assert_eq!(game.playable_cards(ALICE, None).unwrap(), alice_hand);

    let lead = game.hand(BOB).unwrap()[0];
    let playable = game.playable_cards(ALICE, Some(&lead)).unwrap();
    if hand_has_suit(&alice_hand, lead.suit) {
        assert!(playable.iter().all(|c| c.suit == lead.suit));
        assert!(!playable.is_empty());
    } else {
        assert_eq!(playable, alice_hand);
    }
}

#[test]
fn out_of_turn_and_foreign_cards_are_rejected() {
    let mut game = seeded(9);
    game.deal_round().unwrap();
    let alice_card = game.hand(ALICE).unwrap()[0];
    let err = game.play_card_for(ALICE, alice_card).unwrap_err();
    assert_eq!(err.code(), ErrorCode::OutOfTurn);
    let err = game.play_card_for(BOB, alice_card).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CardNotFound);
    assert!(game.trick().is_empty());
    assert_eq!(game.hand(BOB).unwrap().len(), 13);
}

#[test]
fn cards_cannot_be_played_while_dealing() {
    let mut game = seeded(9);
    game.deal_card(PileKind::Draw, &card("AS"), BOB).unwrap();
    let err = game.play_card(card("AS")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStageTransition);
}

#[test]
fn incomplete_trick_cannot_be_completed() {
    let mut game = seeded(9);
    game.deal_round().unwrap();
    assert_eq!(game.complete_trick().unwrap_err().code(), ErrorCode::TrickIncomplete);
    let lead = game.legal_plays()[0];
    game.play_card(lead).unwrap();
    assert_eq!(game.trick_winner().map(|p| p.id), Some(BOB));
    assert_eq!(game.complete_trick().unwrap_err().code(), ErrorCode::TrickIncomplete);
}

// Trick resolution on round state

#[test]
fn draft_trick_awards_prizes_then_flips_next() {
    let mut state = state_in(Stage::Draft, Suit::Spades, &["KH", "2C"], &["AH", "3S"]);
    state.draw_pile = stock(&["5D", "9C", "QS", "4H"]);
    state.turn = 1;
    let rules = WhistRules::default();

    assert!(!play_card(&mut state, card("AH")).unwrap());
    let err = play_card(&mut state, card("2C")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MustFollowSuit);
    assert!(play_card(&mut state, card("KH")).unwrap());
    assert_eq!(
        play_card(&mut state, card("2C")).unwrap_err().code(),
        ErrorCode::TrickFull
    );

    let outcome = complete_trick(&mut state, &rules).unwrap();
    assert_eq!(outcome.winner, 1);
    assert_eq!(outcome.prizes, Some((card("5D"), card("9C"))));
    assert_eq!(outcome.stage_after, Stage::Draft);
    assert_eq!(state.hands[1], cards(&["3S", "5D"]));
    assert_eq!(state.hands[0], cards(&["2C", "9C"]));
    assert_eq!(state.discard_pile.as_slice(), cards(&["AH", "KH"]).as_slice());
    assert_eq!(state.turn, 1);
    assert_eq!(state.prize_card(), Some(&card("QS")));
    assert!(!state.draw_pile.top_card().unwrap().face_down);

    // Void in spades, seat 0 may discard anything.
    play_card(&mut state, card("3S")).unwrap();
    play_card(&mut state, card("9C")).unwrap();
    let outcome = complete_trick(&mut state, &rules).unwrap();
    assert_eq!(outcome.winner, 1);
    assert_eq!(outcome.prizes, Some((card("QS"), card("4H"))));
    assert_eq!(outcome.stage_after, Stage::Duel);
    assert_eq!(state.stage, Stage::Duel);
    assert!(state.draw_pile.is_empty());
}

#[test]
fn draft_with_one_stock_card_cannot_pay_prizes() {
    let mut state = state_in(Stage::Draft, Suit::Spades, &["KH"], &["AH"]);
    state.draw_pile = stock(&["5D"]);
    state.turn = 1;
    play_card(&mut state, card("AH")).unwrap();
    play_card(&mut state, card("KH")).unwrap();
    let err = complete_trick(&mut state, &WhistRules::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PileEmpty);
    assert_eq!(state.trick.len(), 2);
}

#[test]
fn trump_beats_lead_suit() {
    let mut state = state_in(Stage::Duel, Suit::Hearts, &["2H", "4D"], &["9S", "5D"]);
    state.turn = 1;
    play_card(&mut state, card("9S")).unwrap();
    assert_eq!(resolve_current_trick(&state), Some(1));
    play_card(&mut state, card("2H")).unwrap();
    assert_eq!(resolve_current_trick(&state), Some(0));

    let outcome = complete_trick(&mut state, &WhistRules::default()).unwrap();
    assert_eq!(outcome.winner, 0);
    assert_eq!(state.tricks_won, [1, 0]);
    assert_eq!(state.turn, 0);
    assert_eq!(outcome.round_points, None);
}

#[test]
fn last_duel_trick_scores_the_round() {
    let mut state = state_in(Stage::Duel, Suit::Hearts, &["2S"], &["AS"]);
    state.turn = 1;
    state.tricks_won = [6, 6];
    play_card(&mut state, card("AS")).unwrap();
    play_card(&mut state, card("2S")).unwrap();

    let outcome = complete_trick(&mut state, &WhistRules::default()).unwrap();
    assert_eq!(outcome.round_points, Some([0, 1]));
    assert_eq!(state.scores, [0, 1]);
    assert!(state.round_scored);
    assert_eq!(state.match_winner, None);

    let err = play_card(&mut state, card("AS")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoundOver);
}

#[test]
fn reaching_the_target_wins_the_match() {
    let mut state = state_in(Stage::Duel, Suit::Clubs, &["2S"], &["AS"]);
    state.turn = 1;
    state.tricks_won = [4, 8];
    state.scores = [3, 4];
    play_card(&mut state, card("AS")).unwrap();
    play_card(&mut state, card("2S")).unwrap();

    let outcome = complete_trick(&mut state, &WhistRules::default()).unwrap();
    assert_eq!(outcome.round_points, Some([0, 3]));
    assert_eq!(state.scores, [3, 7]);
    assert_eq!(state.match_winner, Some(1));
}

// Whole rounds

#[test]
fn full_round_drafts_then_duels_then_scores() {
    let mut game = seeded(2024);
    game.deal_round().unwrap();
    let (draft, duel) = play_out_round(&mut game);

    assert_eq!(draft, 13);
    assert_eq!(duel, 13);
    assert_eq!(game.stage(), Stage::Duel);
    assert!(game.draw_pile().is_empty());
    assert_eq!(game.discard_pile().size(), 52);
    assert!(game.hand(ALICE).unwrap().is_empty());

    let alice_tricks = game.tricks_won(ALICE).unwrap();
    let bob_tricks = game.tricks_won(BOB).unwrap();
    assert_eq!(alice_tricks + bob_tricks, 13);
    assert_eq!(game.score(ALICE).unwrap(), u32::from(alice_tricks.saturating_sub(6)));
    assert_eq!(game.score(BOB).unwrap(), u32::from(bob_tricks.saturating_sub(6)));
    assert!(game.score(ALICE).unwrap() + game.score(BOB).unwrap() >= 1);
}

#[test]
fn next_round_rotates_dealer_and_keeps_scores() {
    let rules = WhistRules {
        match_target: 1000,
        ..WhistRules::default()
    };
    let mut game = WhistGame::with_seed(players(), rules, 77).unwrap();
    assert_eq!(game.start_next_round().unwrap_err().code(), ErrorCode::InvalidStageTransition);

    game.deal_round().unwrap();
    play_out_round(&mut game);
    let scores = (game.score(ALICE).unwrap(), game.score(BOB).unwrap());

    game.start_next_round().unwrap();
    assert_eq!(game.round_no(), 2);
    assert_eq!(game.stage(), Stage::Deal);
    assert_eq!(game.dealer().id, BOB);
    assert_eq!(game.current_player().id, ALICE);
    assert_eq!(game.trump(), None);
    assert_eq!(game.draw_pile().size(), 52);
    assert!(game.hand(BOB).unwrap().is_empty());
    assert_eq!((game.score(ALICE).unwrap(), game.score(BOB).unwrap()), scores);

    game.deal_round().unwrap();
    assert_eq!(game.current_player().id, ALICE);
}

#[test]
fn decided_match_cannot_continue() {
    let rules = WhistRules {
        match_target: 1,
        ..WhistRules::default()
    };
    let mut game = WhistGame::with_seed(players(), rules, 13).unwrap();
    game.deal_round().unwrap();
    play_out_round(&mut game);
    assert!(game.match_winner().is_some());
    assert_eq!(game.start_next_round().unwrap_err().code(), ErrorCode::InvalidStageTransition);
}

#[test]
fn reset_returns_to_a_fresh_match() {
    let mut game = seeded(31);
    let fresh = seeded(31).snapshot();
    game.deal_round().unwrap();
    play_out_round(&mut game);
    game.reset();
    assert_eq!(game.snapshot(), fresh);
    assert_eq!(game.state(), &WhistRoundState::initial());
}

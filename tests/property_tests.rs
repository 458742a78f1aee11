//! Property-based tests for movement and the turn protocol.

use proptest::prelude::*;

use ludo_engine::core::{
    DicePair, GameConfig, GameRng, GameState, PieceId, PieceState, PlayerId, RingIndex,
    StretchIndex,
};
use ludo_engine::games::ludo::{capture_targets, LudoRules};
use ludo_engine::rules::movement::advance;
use ludo_engine::rules::{ActionOutcome, MoveError, RulesEngine};
use ludo_engine::Action;

fn player_strategy() -> impl Strategy<Value = PlayerId> {
    (0..4u8).prop_map(PlayerId::new)
}

fn dice_strategy() -> impl Strategy<Value = DicePair> {
    (1..=6u8, 1..=6u8).prop_map(|(a, b)| DicePair::new(a, b))
}

fn piece_state_strategy() -> impl Strategy<Value = PieceState> {
    prop_oneof![
        Just(PieceState::Home),
        (0..40u8).prop_map(|c| PieceState::Active(RingIndex::new(c))),
        (0..4u8).prop_map(|c| PieceState::FinalPath(StretchIndex::new(c))),
        Just(PieceState::Finished),
    ]
}

/// Play `steps` random legal actions, checking `check` after each one.
fn random_playout(seed: u64, steps: usize, mut check: impl FnMut(&GameState, &Action, &ActionOutcome, &GameState)) {
    let config = GameConfig::new().with_seed(seed).without_history();
    let mut state = GameState::new(&config);
    let mut rules = LudoRules::seeded(config);
    let mut chooser = GameRng::new(seed ^ 0x5eed);

    for _ in 0..steps {
        let actions = rules.legal_actions(&state);
        let Some(&action) = chooser.choose(&actions) else {
            break;
        };
        let before = state.clone();
        let outcome = rules
            .apply_action(&mut state, &action)
            .unwrap_or_else(|err| panic!("legal action {action} rejected: {err}"));
        check(&before, &action, &outcome, &state);
        if rules.is_terminal(&state).is_some() {
            break;
        }
    }
}

proptest! {
    // 1. Successful moves always carry a piece forward
    #[test]
    fn advance_moves_forward(
        owner in player_strategy(),
        state in piece_state_strategy(),
        dice in dice_strategy(),
    ) {
        if let (Ok(next), Some(before)) = (advance(owner, state, dice), state.progress(owner)) {
            let after = next.progress(owner).unwrap();
            prop_assert_eq!(after, before + dice.sum());
        }
    }

    // 2. Overshoot is exactly the distance past the finish
    #[test]
    fn advance_overshoot_is_exact(
        owner in player_strategy(),
        state in piece_state_strategy(),
        dice in dice_strategy(),
    ) {
        if let Err(MoveError::Overshoot { overshoot }) = advance(owner, state, dice) {
            let before = state.progress(owner).unwrap();
            prop_assert_eq!(before + dice.sum(), 44 + overshoot);
        }
    }

    // 3. Home pieces leave only on a six, onto their own entry cell
    #[test]
    fn home_exit_needs_six(owner in player_strategy(), dice in dice_strategy()) {
        let result = advance(owner, PieceState::Home, dice);
        if dice.has_six() {
            prop_assert_eq!(result, Ok(PieceState::Active(RingIndex::new(1 + 10 * owner.raw()))));
        } else {
            prop_assert_eq!(result, Err(MoveError::NeedsSix));
        }
    }

    // 4. Captures only ever hit other players on the mover's ring cell
    #[test]
    fn capture_targets_are_opponents(
        states in prop::collection::vec(piece_state_strategy(), 16),
        mover in 0..16usize,
    ) {
        let mut state = GameState::new(&GameConfig::default());
        for (id, piece_state) in PieceId::all().zip(states) {
            state.place_piece(id, piece_state);
        }
        let mover = PieceId::all().nth(mover).unwrap();
        let cell = state.piece(mover).state().ring();

        for victim in capture_targets(&state, mover) {
            prop_assert_ne!(victim.player(), mover.player());
            prop_assert_eq!(state.piece(victim).state().ring(), cell);
            prop_assert!(cell.is_some());
        }
    }

    // 5. Turn flags stay consistent through random play
    #[test]
    fn turn_flags_consistent(seed in any::<u64>()) {
        random_playout(seed, 300, |_, _, _, state| {
            let turn = state.turn();
            assert_eq!(turn.bonus_roll(), turn.dice().is_some_and(|d| d.is_double()));
            assert!(!turn.has_moved() || turn.has_rolled());
            assert!(state.check_invariants().is_ok());
        });
    }

    // 6. Handoffs advance by one seat unless a double was rolled
    #[test]
    fn handoff_advances_one_seat(seed in any::<u64>()) {
        random_playout(seed, 300, |before, _, outcome, after| {
            if let ActionOutcome::TurnEnded { next, bonus } = *outcome {
                let player = before.current_player();
                assert_eq!(bonus, before.turn().bonus_roll());
                assert_eq!(next, if bonus { player } else { player.next() });
                assert_eq!(after.current_player(), next);
                assert!(!after.turn().has_rolled());
                assert_eq!(after.turn().selected(), None);
                assert_eq!(after.turn_number(), before.turn_number() + 1);
            }
        });
    }

    // 7. Only the moved piece changes on a move; only victims change on a capture
    #[test]
    fn moves_touch_only_their_piece(seed in any::<u64>()) {
        random_playout(seed, 300, |before, _, outcome, after| {
            let changed: Vec<PieceId> = PieceId::all()
                .filter(|&id| before.piece(id).state() != after.piece(id).state())
                .collect();
            match outcome {
                ActionOutcome::Moved { piece, from, to } => {
                    assert_eq!(changed, vec![*piece]);
                    assert!(to.progress(piece.player()) > from.progress(piece.player()));
                }
                ActionOutcome::Captured(victims) => {
                    assert_eq!(changed.as_slice(), victims.as_slice());
                    assert!(victims.iter().all(|&v| after.piece(v).state().is_home()));
                }
                _ => assert!(changed.is_empty()),
            }
        });
    }
}

//! Invariants over arbitrary move sequences.

use proptest::prelude::*;
use rpsrs::{Choice, Game, GameOptions, GameState, MoveError, Outcome, SequenceSource, resolve};

fn choice() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Rock), Just(Choice::Paper), Just(Choice::Scissors)]
}

proptest! {
    #[test]
    fn resolve_is_antisymmetric(a in choice(), b in choice()) {
        let forward = resolve(a, b);
        prop_assert_eq!(resolve(b, a), forward.reversed());
        prop_assert_eq!(forward == Outcome::Draw, a == b);
        prop_assert_eq!(forward == Outcome::Lose, a.beats(b));
    }

    #[test]
    fn counters_track_successful_moves(
        limit in 1u32..16,
        moves in prop::collection::vec(choice(), 0..40),
        opponents in prop::collection::vec(choice(), 1..8),
    ) {
        let source = SequenceSource::new(opponents).unwrap();
        let game = Game::with_source(GameOptions::default().with_round_limit(limit), source);
        let mut accepted = 0u32;
        let mut expected_score = 0i32;

        for player in moves {
            let was_over = game.is_game_over();
            match game.submit_move(player) {
                Ok(result) => {
                    prop_assert!(!was_over);
                    accepted += 1;
                    expected_score += result.outcome.score_delta();
                    prop_assert_eq!(result.round, accepted);
                    prop_assert_eq!(result.outcome, resolve(result.opponent_choice, player));
                }
                Err(err) => {
                    prop_assert!(was_over);
                    prop_assert_eq!(err, MoveError::InvalidState);
                }
            }

            let state = game.state();
            prop_assert!(state.round_index <= state.round_limit);
            prop_assert_eq!(state.round_index, accepted);
            prop_assert_eq!(state.is_game_over, state.round_index == state.round_limit);
            prop_assert_eq!(state.score, expected_score);
            prop_assert_eq!(state.score, state.wins as i32 - state.losses as i32);
            prop_assert_eq!(state.wins + state.losses + state.draws, state.round_index);
            prop_assert!(state.score.unsigned_abs() <= state.round_index);
        }

        prop_assert_eq!(game.history().len(), accepted as usize);
    }

    #[test]
    fn reset_restores_initial_state(
        seed in any::<u64>(),
        moves in prop::collection::vec(choice(), 0..15),
    ) {
        let game = Game::new(GameOptions::default(), seed);
        for player in moves {
            let _ = game.submit_move(player);
        }

        game.reset();

        prop_assert_eq!(game.state(), GameState::initial(10));
        prop_assert!(game.history().is_empty());
        prop_assert!(game.last_result().is_none());
    }
}

//! Property tests for scoring over randomly played legal games.

use proptest::prelude::*;

use tenpin::core::{compute_score, final_score, is_final, Frame, Game};
use tenpin::types::{FRAME_COUNT, MAX_ROLLS_PER_GAME, PERFECT_SCORE};

/// Feed `draws` into a new game, folding each draw onto the pins actually
/// standing so every roll is legal. Stops once the game is complete.
fn play_legal(draws: &[u8]) -> (Game, Vec<u8>) {
    let mut game = Game::new();
    let mut thrown = Vec::new();
    for &draw in draws {
        if game.is_complete() {
            break;
        }
        let standing = game.current_frame().pins_standing();
        let pins = draw % (standing + 1);
        assert_eq!(game.roll(pins as i32), Ok(true));
        thrown.push(pins);
    }
    (game, thrown)
}

/// Textbook roll-indexed scorer, used only as an oracle for complete games.
fn reference_total(rolls: &[u8]) -> u32 {
    let r = |i: usize| rolls[i] as u32;
    let mut total = 0;
    let mut i = 0;
    for _ in 0..FRAME_COUNT {
        if r(i) == 10 {
            total += 10 + r(i + 1) + r(i + 2);
            i += 1;
        } else if r(i) + r(i + 1) == 10 {
            total += 10 + r(i + 2);
            i += 2;
        } else {
            total += r(i) + r(i + 1);
            i += 2;
        }
    }
    total
}

fn frame_rolls() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=10, 0..=MAX_ROLLS_PER_GAME)
}

proptest! {
    #[test]
    fn scoring_is_idempotent(draws in frame_rolls()) {
        let (game, _) = play_legal(&draws);
        let frames: Vec<Frame> = game.frames().to_vec();
        prop_assert_eq!(compute_score(&frames), compute_score(&frames));
        prop_assert_eq!(frames.as_slice(), game.frames());
    }

    #[test]
    fn cumulative_scores_never_decrease(draws in frame_rolls()) {
        let (game, _) = play_legal(&draws);
        let settled: Vec<u32> = game.scores().iter().filter_map(|e| e.frame_score).collect();
        for pair in settled.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?}", settled);
        }
    }

    #[test]
    fn only_the_last_entry_may_be_pending(draws in frame_rolls()) {
        let (game, _) = play_legal(&draws);
        let entries = game.scores();
        prop_assert!(!entries.is_empty());
        prop_assert!(entries.len() <= FRAME_COUNT);
        for (i, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.frame_number as usize, i + 1);
            if i + 1 < entries.len() {
                prop_assert!(entry.frame_score.is_some());
            }
        }
    }

    #[test]
    fn complete_games_match_reference_scorer(draws in prop::collection::vec(0u8..=10, MAX_ROLLS_PER_GAME)) {
        let (game, thrown) = play_legal(&draws);
        prop_assert!(game.is_complete());

        let entries = game.scores();
        prop_assert!(is_final(&entries));
        let total = final_score(&entries);
        prop_assert_eq!(total, reference_total(&thrown));
        prop_assert!(total <= PERFECT_SCORE);
    }
}

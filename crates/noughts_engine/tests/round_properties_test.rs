//! Property tests over whole rounds.

use noughts_engine::{Cell, RandomSource, RoundEngine, RoundOutcome, SessionRng, Side};
use proptest::prelude::*;

proptest! {
    #[test]
    fn out_of_range_never_changes_state(
        opening in proptest::collection::vec((0usize..3, 0usize..3), 0..4),
        row in 0usize..64,
        col in 0usize..64,
    ) {
        prop_assume!(row > 2 || col > 2);

        let mut engine = RoundEngine::seeded(1);
        for (r, c) in opening {
            let _ = engine.attempt_move(r, c);
        }
        let board = engine.board().clone();
        let turn = engine.turn();
        let outcome = engine.current_outcome();

        prop_assert!(!engine.is_available(row, col));
        prop_assert!(engine.attempt_move(row, col).is_err());
        prop_assert_eq!(engine.board(), &board);
        prop_assert_eq!(engine.turn(), turn);
        prop_assert_eq!(engine.current_outcome(), outcome);
    }

    #[test]
    fn random_games_only_mark_empty_cells(seed in any::<u64>(), human_seed in any::<u64>()) {
        let mut engine = RoundEngine::seeded(seed);
        let mut human = SessionRng::new(human_seed);

        while !engine.current_outcome().is_terminal() {
            match engine.turn() {
                Side::Human => {
                    let open = engine.board().empty_cells();
                    let coord = open[human.pick(open.len())];
                    engine.attempt_move(coord.row(), coord.col()).unwrap();
                }
                Side::Computer => {
                    let before = engine.board().clone();
                    let placement = engine.automated_move().unwrap();
                    prop_assert_eq!(before.get(placement.applied.coord), Cell::Empty);
                    prop_assert_eq!(placement.applied.side, Side::Computer);
                }
            }

            let first = engine.evaluate();
            prop_assert_eq!(first, engine.evaluate());
            prop_assert_eq!(first, engine.current_outcome());
        }

        let marks = engine
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();
        prop_assert_eq!(marks, engine.history().len());
        prop_assert!(engine.history().len() >= 5);
        if engine.current_outcome() == RoundOutcome::Draw {
            prop_assert_eq!(marks, 9);
        }
    }

    #[test]
    fn scores_never_decrease(seeds in proptest::collection::vec(any::<u64>(), 1..6)) {
        let mut engine = RoundEngine::seeded(0);
        let mut previous = *engine.scores();

        for seed in seeds {
            engine.reset();
            let mut human = SessionRng::new(seed);
            while !engine.current_outcome().is_terminal() {
                if engine.turn() == Side::Human {
                    let open = engine.board().empty_cells();
                    let coord = open[human.pick(open.len())];
                    engine.attempt_move(coord.row(), coord.col()).unwrap();
                } else {
                    engine.automated_move().unwrap();
                }
            }
            engine.report_result();

            let now = *engine.scores();
            prop_assert!(now.human() >= previous.human());
            prop_assert!(now.computer() >= previous.computer());
            prop_assert!(
                now.human() + now.computer() <= previous.human() + previous.computer() + 1
            );
            previous = now;
        }
    }
}

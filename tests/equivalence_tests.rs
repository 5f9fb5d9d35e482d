//! Property tests: incremental indices against direct board scans.
//!
//! Moves are drawn from a small window so runs, blocks and merges are
//! frequent.

use std::collections::HashSet;

use proptest::prelude::*;

use infinite_ttt::core::{Axis, Coord, Mark};
use infinite_ttt::index::{ConnectivityIndex, RunIndex, WinIndex};
use infinite_ttt::rules::scan;
use infinite_ttt::rules::WinEngine;

const WIN: u32 = 5;

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

// Distinct-coordinate placements, first occurrence wins
fn moves_strategy() -> impl Strategy<Value = Vec<(Coord, Mark)>> {
    prop::collection::vec(((-6i32..6, -6i32..6), mark_strategy()), 0..150).prop_map(|raw| {
        let mut seen = HashSet::new();
        raw.into_iter()
            .map(|((x, y), m)| (Coord::new(x, y), m))
            .filter(|(c, _)| seen.insert(*c))
            .collect()
    })
}

fn wins_per_move<I: WinIndex + Default>(moves: &[(Coord, Mark)]) -> Vec<Vec<Axis>> {
    let mut engine: WinEngine<I> = WinEngine::with_win_length(WIN);
    moves
        .iter()
        .map(|&(at, mark)| engine.apply_move(at, mark).unwrap().wins.to_vec())
        .collect()
}

fn check_against_scan<I: WinIndex + Default>(moves: &[(Coord, Mark)]) -> Result<(), TestCaseError> {
    let mut engine: WinEngine<I> = WinEngine::with_win_length(WIN);
    for &(at, mark) in moves {
        let outcome = engine.apply_move(at, mark).unwrap();
        for axis in Axis::ALL {
            prop_assert_eq!(
                outcome.run_length(axis),
                scan::run_length(engine.board(), at, mark, axis),
                "{} index, {} at {} along {}", I::NAME, mark, at, axis
            );
        }
        prop_assert_eq!(outcome.wins.to_vec(), scan::winning_axes(engine.board(), at, WIN));
    }
    Ok(())
}

fn final_board_has_win(moves: &[(Coord, Mark)]) -> bool {
    let mut engine = WinEngine::new();
    for &(at, mark) in moves {
        engine.apply_move(at, mark).unwrap();
    }
    moves
        .iter()
        .any(|&(at, _)| !scan::winning_axes(engine.board(), at, WIN).is_empty())
}

proptest! {
    /// Each move's run lengths and winning axes match a direct scan.
    #[test]
    fn prop_run_index_matches_scan(moves in moves_strategy()) {
        check_against_scan::<RunIndex>(&moves)?;
    }

    /// Same for the union-find index.
    #[test]
    fn prop_connectivity_index_matches_scan(moves in moves_strategy()) {
        check_against_scan::<ConnectivityIndex>(&moves)?;
    }

    /// The two indices agree move by move.
    #[test]
    fn prop_indices_agree(moves in moves_strategy()) {
        prop_assert_eq!(
            wins_per_move::<RunIndex>(&moves),
            wins_per_move::<ConnectivityIndex>(&moves)
        );
    }

    /// A refused placement leaves board and index exactly as they were.
    #[test]
    fn prop_rejection_is_pure(
        moves in moves_strategy(),
        picks in prop::collection::vec((any::<prop::sample::Index>(), mark_strategy()), 1..20),
    ) {
        prop_assume!(!moves.is_empty());

        let mut run: WinEngine<RunIndex> = WinEngine::new();
        let mut conn: WinEngine<ConnectivityIndex> = WinEngine::with_win_length(WIN);
        for &(at, mark) in &moves {
            run.apply_move(at, mark).unwrap();
            conn.apply_move(at, mark).unwrap();
        }

        for (pick, mark) in picks {
            let (at, _) = moves[pick.index(moves.len())];

            let before = run.clone();
            prop_assert!(run.apply_move(at, mark).is_err());
            prop_assert_eq!(&run, &before);

            let before = conn.clone();
            prop_assert!(conn.apply_move(at, mark).is_err());
            prop_assert_eq!(&conn, &before);
        }
    }

    /// Reset followed by a replay reproduces a first run exactly.
    #[test]
    fn prop_reset_is_idempotent(first in moves_strategy(), second in moves_strategy()) {
        let mut engine: WinEngine<RunIndex> = WinEngine::new();
        for &(at, mark) in &first {
            engine.apply_move(at, mark).unwrap();
        }
        engine.reset();
        for &(at, _) in &first {
            prop_assert!(!engine.occupied(at));
        }

        let replayed: Vec<_> = second
            .iter()
            .map(|&(at, mark)| engine.apply_move(at, mark).unwrap().wins.to_vec())
            .collect();
        prop_assert_eq!(replayed, wins_per_move::<RunIndex>(&second));
    }

    /// Reordering the same placements may move the winning move, but not
    /// whether the finished board contains a win.
    #[test]
    fn prop_order_does_not_change_final_result(
        (moves, shuffled) in moves_strategy()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let any_win = |m: &[(Coord, Mark)]| {
            wins_per_move::<RunIndex>(m).iter().any(|w| !w.is_empty())
        };

        let expected = final_board_has_win(&moves);
        prop_assert_eq!(any_win(&moves), expected);
        prop_assert_eq!(any_win(&shuffled), expected);

        let occupied: HashSet<_> = moves.iter().map(|(c, _)| *c).collect();
        let reordered: HashSet<_> = shuffled.iter().map(|(c, _)| *c).collect();
        prop_assert_eq!(occupied, reordered);
    }
}

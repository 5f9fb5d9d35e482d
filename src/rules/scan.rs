//! Direct board scans.
//!
//! Walks the board cell by cell from a starting stone. Cost grows with run
//! length, so the engine never uses these to decide a win; they serve as
//! the reference the incremental indices are checked against, and to list
//! the cells of a winning line after the fact.

use crate::board::BoardStore;
use crate::core::{Axis, Coord, Mark};

/// Count consecutive `mark` stones from `at` (exclusive) stepping by `sign`.
fn count_direction(board: &BoardStore, at: Coord, mark: Mark, axis: Axis, sign: i64) -> u32 {
    let mut count = 0u32;
    let mut current = at;
    while let Some(next) = current.offset(axis, sign) {
        if board.get(next) != Some(mark) {
            break;
        }
        count += 1;
        current = next;
    }
    count
}

/// Length of the `mark` run along `axis` through `at`.
///
/// Returns 0 if `at` does not hold `mark`.
///
/// ```
/// use infinite_ttt::board::BoardStore;
/// use infinite_ttt::core::{Axis, Coord, Mark};
/// use infinite_ttt::rules::scan::run_length;
///
/// let mut board = BoardStore::new();
/// for x in 0..3 {
///     board.place(Coord::new(x, 0), Mark::X).unwrap();
/// }
/// assert_eq!(run_length(&board, Coord::new(1, 0), Mark::X, Axis::Horizontal), 3);
/// assert_eq!(run_length(&board, Coord::new(1, 0), Mark::X, Axis::Vertical), 1);
/// ```
#[must_use]
pub fn run_length(board: &BoardStore, at: Coord, mark: Mark, axis: Axis) -> u32 {
    if board.get(at) != Some(mark) {
        return 0;
    }
    1 + count_direction(board, at, mark, axis, 1) + count_direction(board, at, mark, axis, -1)
}

/// Cells of the run along `axis` through `at`, ordered from the negative
/// extreme to the positive one.
///
/// Empty if `at` is empty.
#[must_use]
pub fn run_cells(board: &BoardStore, at: Coord, axis: Axis) -> Vec<Coord> {
    let Some(mark) = board.get(at) else {
        return Vec::new();
    };

    let back = count_direction(board, at, mark, axis, -1);
    let forward = count_direction(board, at, mark, axis, 1);

    (-i64::from(back)..=i64::from(forward))
        .filter_map(|k| at.offset(axis, k))
        .collect()
}

/// Axes along which the stone at `at` is part of a run of at least `win_length`.
#[must_use]
pub fn winning_axes(board: &BoardStore, at: Coord, win_length: u32) -> Vec<Axis> {
    let Some(mark) = board.get(at) else {
        return Vec::new();
    };
    Axis::ALL
        .into_iter()
        .filter(|&axis| run_length(board, at, mark, axis) >= win_length)
        .collect()
}

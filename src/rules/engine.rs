//! Win-detection engine.
//!
//! Couples a [`BoardStore`] with a [`WinIndex`]:
//! - Rejects placements on occupied cells before touching anything
//! - Records the stone, then feeds it to the index once per axis
//! - Reports every axis whose run reached the win length
//!
//! The engine has no notion of turns or of a finished game. Callers decide
//! what a winning axis means.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::BoardStore;
use crate::core::{Axis, AxisMap, Coord, Mark, PlaceError, WIN_LENGTH};
use crate::index::{RunIndex, WinIndex};

use super::scan;

/// Result of an accepted placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the stone went.
    pub at: Coord,
    /// Whose stone it was.
    pub mark: Mark,
    /// Length of the run through `at` on each axis.
    pub runs: AxisMap<u32>,
    /// Axes whose run reached the win length, in [`Axis::ALL`] order.
    pub wins: SmallVec<[Axis; 4]>,
}

impl MoveOutcome {
    /// Check if any axis reached the win length.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.wins.is_empty()
    }

    /// Run length through the placed stone along `axis`.
    #[must_use]
    pub fn run_length(&self, axis: Axis) -> u32 {
        self.runs[axis]
    }

    /// Longest run through the placed stone on any axis.
    #[must_use]
    pub fn longest_run(&self) -> u32 {
        self.runs.iter().map(|(_, len)| *len).max().unwrap_or(0)
    }
}

/// Incremental win detector over an unbounded board.
///
/// ## Usage
///
/// ```
/// use infinite_ttt::core::{Axis, Coord, Mark};
/// use infinite_ttt::rules::WinEngine;
///
/// let mut engine = WinEngine::new();
/// for x in 0..4 {
///     let outcome = engine.apply_move(Coord::new(x, 0), Mark::X).unwrap();
///     assert!(!outcome.is_win());
/// }
/// let outcome = engine.apply_move(Coord::new(4, 0), Mark::X).unwrap();
/// assert_eq!(outcome.wins.as_slice(), &[Axis::Horizontal]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinEngine<I = RunIndex> {
    board: BoardStore,
    index: I,
    win_length: u32,
}

impl WinEngine<RunIndex> {
    /// Five-in-a-row engine backed by the run index.
    #[must_use]
    pub fn new() -> Self {
        Self::with_win_length(WIN_LENGTH)
    }
}

impl Default for WinEngine<RunIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: WinIndex + Default> WinEngine<I> {
    /// Engine with a custom win length and a fresh index.
    #[must_use]
    pub fn with_win_length(win_length: u32) -> Self {
        assert!(win_length > 0, "Win length must be at least 1");
        Self {
            board: BoardStore::new(),
            index: I::default(),
            win_length,
        }
    }
}

impl<I: WinIndex> WinEngine<I> {
    /// Discard every stone and all index state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.index.clear();
    }

    /// Place `mark` at `at` and report the runs through it.
    ///
    /// Fails with `AlreadyOccupied` if the cell is taken, in which case
    /// neither the board nor the index changes.
    pub fn apply_move(&mut self, at: Coord, mark: Mark) -> Result<MoveOutcome, PlaceError> {
        self.board.place(at, mark)?;

        let mut runs = AxisMap::default();
        let mut wins = SmallVec::new();
        for axis in Axis::ALL {
            let total = self.index.on_place(at, mark, axis);
            runs[axis] = total;
            if total >= self.win_length {
                wins.push(axis);
            }
        }

        trace!("{} placed {} via {} index, runs {:?}", mark, at, I::NAME, runs);
        if !wins.is_empty() {
            debug!("{} wins at {} along {:?}", mark, at, wins);
        }

        Ok(MoveOutcome { at, mark, runs, wins })
    }

    /// Check if a cell holds a stone.
    #[must_use]
    pub fn occupied(&self, at: Coord) -> bool {
        self.board.occupied(at)
    }

    /// Cells of the run through `at` along `axis`, negative extreme first.
    ///
    /// Read from the board, so the answer does not depend on the index.
    #[must_use]
    pub fn winning_line(&self, at: Coord, axis: Axis) -> Vec<Coord> {
        scan::run_cells(&self.board, at, axis)
    }

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &BoardStore {
        &self.board
    }

    /// The underlying index.
    #[must_use]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Configured win length.
    #[must_use]
    pub fn win_length(&self) -> u32 {
        self.win_length
    }

    /// Number of stones placed since the last reset.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.board.len()
    }
}

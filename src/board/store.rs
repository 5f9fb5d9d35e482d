//! Sparse occupancy map.

use rustc_hash::FxHashMap;

use crate::core::{Coord, Mark, PlaceError};

/// Which mark, if any, holds each cell.
///
/// Only occupied cells have entries, so memory follows the number of
/// placements rather than the extent of the grid. Cells are never vacated;
/// the only way to empty the store is [`BoardStore::clear`].
///
/// ## Usage
///
/// ```
/// use infinite_ttt::board::BoardStore;
/// use infinite_ttt::core::{Coord, Mark, PlaceError};
///
/// let mut board = BoardStore::new();
/// board.place(Coord::new(0, 0), Mark::X).unwrap();
///
/// assert!(board.occupied(Coord::new(0, 0)));
/// assert_eq!(board.get(Coord::new(0, 0)), Some(Mark::X));
/// assert!(matches!(
///     board.place(Coord::new(0, 0), Mark::O),
///     Err(PlaceError::AlreadyOccupied { .. })
/// ));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardStore {
    cells: FxHashMap<Coord, Mark>,
}

impl BoardStore {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a cell holds a mark.
    #[must_use]
    pub fn occupied(&self, at: Coord) -> bool {
        self.cells.contains_key(&at)
    }

    /// Mark at a cell, or `None` if empty.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Mark> {
        self.cells.get(&at).copied()
    }

    /// Record `mark` at `at`.
    ///
    /// Fails with `AlreadyOccupied` without touching the board if the cell
    /// is taken.
    pub fn place(&mut self, at: Coord, mark: Mark) -> Result<(), PlaceError> {
        if self.occupied(at) {
            return Err(PlaceError::AlreadyOccupied { at });
        }
        self.cells.insert(at, mark);
        Ok(())
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no stone has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over occupied cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Mark)> + '_ {
        self.cells.iter().map(|(c, m)| (*c, *m))
    }

    /// Remove every stone and release the storage.
    pub fn clear(&mut self) {
        self.cells = FxHashMap::default();
    }
}

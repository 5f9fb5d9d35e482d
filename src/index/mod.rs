//! Incremental run-length indices.
//!
//! After every placement the engine asks an index one question per axis:
//! how long is the same-mark run through the cell just placed? Two
//! implementations answer it without rescanning the board:
//!
//! - [`RunIndex`]: stores the run length at each run's two live extremes.
//!   Three map writes per axis per move, independent of run length.
//! - [`ConnectivityIndex`]: one union-find forest per mark and axis, merging
//!   a new stone with its immediate same-mark neighbours.
//!
//! Both give identical answers on every sequence of distinct placements.
//! Neither validates occupancy; the engine rejects occupied cells before an
//! index is ever consulted.
//!
//! ## Example Usage
//!
//! ```
//! use infinite_ttt::core::{Axis, Coord, Mark};
//! use infinite_ttt::index::{ConnectivityIndex, RunIndex, WinIndex};
//!
//! fn place_row(index: &mut impl WinIndex) -> u32 {
//!     let mut last = 0;
//!     for x in [0, 2, 1] {
//!         last = index.on_place(Coord::new(x, 0), Mark::X, Axis::Horizontal);
//!     }
//!     last
//! }
//!
//! assert_eq!(place_row(&mut RunIndex::new()), 3);
//! assert_eq!(place_row(&mut ConnectivityIndex::new()), 3);
//! ```

mod connectivity;
mod run;

pub use connectivity::ConnectivityIndex;
pub use run::RunIndex;

use crate::core::{Axis, Coord, Mark};

/// Capability shared by run-length indices.
///
/// Implementations receive every accepted placement exactly once per axis,
/// in placement order.
pub trait WinIndex {
    /// Short name for logs.
    const NAME: &'static str;

    /// Record that `mark` now occupies `at` and return the length of the
    /// contiguous `mark` run along `axis` that contains `at`.
    ///
    /// `at` must not have been placed before since the last [`clear`].
    ///
    /// [`clear`]: WinIndex::clear
    fn on_place(&mut self, at: Coord, mark: Mark, axis: Axis) -> u32;

    /// Drop every entry.
    fn clear(&mut self);

    /// Number of sparse entries currently held, stale ones included.
    fn entry_count(&self) -> usize;
}

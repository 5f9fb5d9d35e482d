//! Extreme-anchored run lengths.
//!
//! For each mark and axis a sparse map records, at a run's two extremes, the
//! length of that run. A new stone only ever probes its two immediate
//! neighbours, and a same-mark neighbour of an empty cell is always an
//! extreme of its run, so the probe reads an up-to-date length. The merged
//! length is then written at both new extremes and at the new stone.
//!
//! Interior cells keep whatever length they last held. Nothing reads them
//! again, so they are left in place.

use rustc_hash::FxHashMap;

use crate::core::{Axis, AxisMap, Coord, Mark, MarkMap};

use super::WinIndex;

type Lengths = FxHashMap<Coord, u32>;

/// Extreme-anchored run index.
///
/// ## Behavior
///
/// - `on_place()`: 2 reads and up to 3 writes on one map
/// - memory: O(placements), never reclaimed before `clear()`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunIndex {
    lengths: MarkMap<AxisMap<Lengths>>,
}

impl RunIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw recorded length at `at`.
    ///
    /// Current only when `at` is an extreme of a `mark` run along `axis`;
    /// interior cells may report a stale, shorter length.
    #[must_use]
    pub fn anchored(&self, at: Coord, mark: Mark, axis: Axis) -> Option<u32> {
        self.lengths[mark][axis].get(&at).copied()
    }

    fn probe(lengths: &Lengths, at: Option<Coord>) -> u32 {
        at.and_then(|c| lengths.get(&c).copied()).unwrap_or(0)
    }
}

impl WinIndex for RunIndex {
    const NAME: &'static str = "run";

    fn on_place(&mut self, at: Coord, mark: Mark, axis: Axis) -> u32 {
        let lengths = &mut self.lengths[mark][axis];

        let (plus, minus) = at.neighbours(axis);
        let len_plus = Self::probe(lengths, plus);
        let len_minus = Self::probe(lengths, minus);
        let total = len_plus + len_minus + 1;

        // Far extremes are real stones, so the offsets are always in range.
        if let Some(tip) = at.offset(axis, i64::from(len_plus)) {
            lengths.insert(tip, total);
        }
        if let Some(tip) = at.offset(axis, -i64::from(len_minus)) {
            lengths.insert(tip, total);
        }
        lengths.insert(at, total);

        total
    }

    fn clear(&mut self) {
        for per_axis in self.lengths.values_mut() {
            for lengths in per_axis.values_mut() {
                *lengths = Lengths::default();
            }
        }
    }

    fn entry_count(&self) -> usize {
        self.lengths
            .iter()
            .flat_map(|(_, per_axis)| per_axis.iter())
            .map(|(_, lengths)| lengths.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(index: &mut RunIndex, cells: &[(i32, i32)], axis: Axis) -> Vec<u32> {
        cells
            .iter()
            .map(|&(x, y)| index.on_place(Coord::new(x, y), Mark::X, axis))
            .collect()
    }

    #[test]
    fn test_single_stone() {
        let mut index = RunIndex::new();
        assert_eq!(index.on_place(Coord::ORIGIN, Mark::X, Axis::Vertical), 1);
        assert_eq!(index.anchored(Coord::ORIGIN, Mark::X, Axis::Vertical), Some(1));
        assert_eq!(index.anchored(Coord::ORIGIN, Mark::O, Axis::Vertical), None);
    }

    #[test]
    fn test_extend_one_side() {
        let mut index = RunIndex::new();
        let lengths = place_all(&mut index, &[(0, 0), (1, 0), (2, 0), (3, 0)], Axis::Horizontal);
        assert_eq!(lengths, vec![1, 2, 3, 4]);

        // Both extremes carry the full length
        assert_eq!(index.anchored(Coord::new(0, 0), Mark::X, Axis::Horizontal), Some(4));
        assert_eq!(index.anchored(Coord::new(3, 0), Mark::X, Axis::Horizontal), Some(4));
    }

    #[test]
    fn test_bridge_two_runs() {
        let mut index = RunIndex::new();
        place_all(&mut index, &[(0, 0), (1, 0), (3, 0), (4, 0), (5, 0)], Axis::Horizontal);

        let total = index.on_place(Coord::new(2, 0), Mark::X, Axis::Horizontal);
        assert_eq!(total, 6);
        assert_eq!(index.anchored(Coord::new(0, 0), Mark::X, Axis::Horizontal), Some(6));
        assert_eq!(index.anchored(Coord::new(5, 0), Mark::X, Axis::Horizontal), Some(6));
    }

    #[test]
    fn test_interior_entries_go_stale() {
        let mut index = RunIndex::new();
        place_all(&mut index, &[(0, 0), (1, 0), (2, 0)], Axis::Horizontal);

        // (1, 0) stopped being an extreme when (2, 0) arrived
        assert_eq!(index.anchored(Coord::new(1, 0), Mark::X, Axis::Horizontal), Some(2));
        assert_eq!(index.anchored(Coord::new(2, 0), Mark::X, Axis::Horizontal), Some(3));
    }

    #[test]
    fn test_marks_and_axes_are_independent() {
        let mut index = RunIndex::new();
        index.on_place(Coord::new(0, 0), Mark::X, Axis::Horizontal);
        assert_eq!(index.on_place(Coord::new(1, 0), Mark::O, Axis::Horizontal), 1);
        assert_eq!(index.on_place(Coord::new(1, 0), Mark::X, Axis::Vertical), 1);
    }

    #[test]
    fn test_edge_of_domain() {
        let mut index = RunIndex::new();
        let edge = Coord::new(i32::MAX, i32::MIN);
        for axis in Axis::ALL {
            assert_eq!(index.on_place(edge, Mark::O, axis), 1);
        }
        let inner = Coord::new(i32::MAX - 1, i32::MIN);
        assert_eq!(index.on_place(inner, Mark::O, Axis::Horizontal), 2);
    }

    #[test]
    fn test_clear_and_entry_count() {
        let mut index = RunIndex::new();
        place_all(&mut index, &[(0, 0), (1, 0)], Axis::Horizontal);
        assert_eq!(index.entry_count(), 2);

        index.clear();
        assert_eq!(index.entry_count(), 0);
        assert_eq!(index, RunIndex::new());
    }
}

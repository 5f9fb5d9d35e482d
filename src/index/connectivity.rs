//! Union-find connectivity along each axis.
//!
//! Every stone becomes a node in the forest for its mark and axis. A node
//! is only ever united with its immediate neighbours along that axis, so a
//! component is exactly one contiguous run and its size is the run length.

use rustc_hash::FxHashMap;

use crate::core::{Axis, AxisMap, Coord, Mark, MarkMap};

use super::WinIndex;

/// Disjoint-set forest keyed by coordinate.
///
/// Union by size with path compression. Roots map to themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Forest {
    parent: FxHashMap<Coord, Coord>,
    size: FxHashMap<Coord, u32>,
}

impl Forest {
    fn contains(&self, at: Coord) -> bool {
        self.parent.contains_key(&at)
    }

    fn make_set(&mut self, at: Coord) {
        self.parent.insert(at, at);
        self.size.insert(at, 1);
    }

    /// Root of `at` without compressing.
    fn root(&self, at: Coord) -> Option<Coord> {
        let mut current = at;
        loop {
            let parent = *self.parent.get(&current)?;
            if parent == current {
                return Some(current);
            }
            current = parent;
        }
    }

    /// Root of `at`, pointing every node on the path directly at it.
    fn find(&mut self, at: Coord) -> Option<Coord> {
        let root = self.root(at)?;
        let mut current = at;
        while current != root {
            let next = self.parent.insert(current, root)?;
            current = next;
        }
        Some(root)
    }

    fn union(&mut self, a: Coord, b: Coord) -> Option<Coord> {
        let ra = self.find(a)?;
        let rb = self.find(b)?;
        if ra == rb {
            return Some(ra);
        }

        let size_a = self.size.get(&ra).copied().unwrap_or(1);
        let size_b = self.size.get(&rb).copied().unwrap_or(1);
        let (big, small) = if size_a >= size_b { (ra, rb) } else { (rb, ra) };

        self.parent.insert(small, big);
        self.size.remove(&small);
        self.size.insert(big, size_a + size_b);
        Some(big)
    }

    fn component_size(&self, at: Coord) -> Option<u32> {
        let root = self.root(at)?;
        self.size.get(&root).copied()
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Union-find run index.
///
/// Functionally interchangeable with [`RunIndex`](super::RunIndex).
/// Costs amortised near-constant time per union, with a somewhat higher
/// constant factor and two map entries per stone per axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectivityIndex {
    forests: MarkMap<AxisMap<Forest>>,
}

impl ConnectivityIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the `mark` run along `axis` containing `at`.
    ///
    /// `None` if no `mark` stone is at `at`. Unlike the run index this is
    /// current for every cell of the run.
    #[must_use]
    pub fn component_size(&self, at: Coord, mark: Mark, axis: Axis) -> Option<u32> {
        self.forests[mark][axis].component_size(at)
    }
}

impl WinIndex for ConnectivityIndex {
    const NAME: &'static str = "connectivity";

    fn on_place(&mut self, at: Coord, mark: Mark, axis: Axis) -> u32 {
        let forest = &mut self.forests[mark][axis];
        forest.make_set(at);

        let (plus, minus) = at.neighbours(axis);
        for neighbour in [plus, minus].into_iter().flatten() {
            if forest.contains(neighbour) {
                forest.union(at, neighbour);
            }
        }

        forest.component_size(at).unwrap_or(1)
    }

    fn clear(&mut self) {
        for per_axis in self.forests.values_mut() {
            for forest in per_axis.values_mut() {
                *forest = Forest::default();
            }
        }
    }

    fn entry_count(&self) -> usize {
        self.forests
            .iter()
            .flat_map(|(_, per_axis)| per_axis.iter())
            .map(|(_, forest)| forest.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_union_and_find() {
        let mut forest = Forest::default();
        let cells: Vec<_> = (0..4).map(|x| Coord::new(x, 0)).collect();
        for &c in &cells {
            forest.make_set(c);
        }

        forest.union(cells[0], cells[1]);
        forest.union(cells[2], cells[3]);
        assert_eq!(forest.component_size(cells[0]), Some(2));
        assert_ne!(forest.root(cells[1]), forest.root(cells[2]));

        forest.union(cells[1], cells[2]);
        assert_eq!(forest.component_size(cells[3]), Some(4));
        assert_eq!(forest.find(cells[3]), forest.root(cells[0]));
    }

    #[test]
    fn test_find_compresses_path() {
        let mut forest = Forest::default();
        let (a, b, c) = (Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0));
        for x in [a, b, c] {
            forest.make_set(x);
        }
        // Build a chain c -> b -> a by hand
        forest.parent.insert(c, b);
        forest.parent.insert(b, a);

        assert_eq!(forest.find(c), Some(a));
        assert_eq!(forest.parent.get(&c), Some(&a));
    }

    #[test]
    fn test_missing_node() {
        let mut forest = Forest::default();
        assert_eq!(forest.find(Coord::ORIGIN), None);
        assert_eq!(forest.component_size(Coord::ORIGIN), None);
    }

    #[test]
    fn test_run_through_middle() {
        let mut index = ConnectivityIndex::new();
        for x in [0, 1, 3, 4] {
            index.on_place(Coord::new(x, x), Mark::O, Axis::DiagonalDown);
        }
        assert_eq!(index.on_place(Coord::new(2, 2), Mark::O, Axis::DiagonalDown), 5);

        // Every member reports the merged length
        for x in 0..5 {
            assert_eq!(
                index.component_size(Coord::new(x, x), Mark::O, Axis::DiagonalDown),
                Some(5)
            );
        }
    }

    #[test]
    fn test_gap_is_not_bridged() {
        let mut index = ConnectivityIndex::new();
        index.on_place(Coord::new(0, 0), Mark::X, Axis::Vertical);
        assert_eq!(index.on_place(Coord::new(0, 2), Mark::X, Axis::Vertical), 1);
        assert_eq!(index.on_place(Coord::new(0, 1), Mark::O, Axis::Vertical), 1);
    }

    #[test]
    fn test_clear_and_entry_count() {
        let mut index = ConnectivityIndex::new();
        index.on_place(Coord::ORIGIN, Mark::X, Axis::Horizontal);
        index.on_place(Coord::ORIGIN, Mark::X, Axis::Vertical);
        assert_eq!(index.entry_count(), 2);

        index.clear();
        assert_eq!(index.entry_count(), 0);
        assert_eq!(index, ConnectivityIndex::new());
    }
}

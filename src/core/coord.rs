//! Grid coordinates and the four alignment axes.
//!
//! ## Coord
//!
//! A cell on the unbounded grid. Components are `i32`; every value in that
//! domain is a legal cell. Stepping off the edge of the domain is reported
//! as `None` rather than wrapping.
//!
//! ## Axis
//!
//! One of the four lines a run can follow. A direction and its negation
//! are the same axis, so each axis stores a single unit step.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A cell on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord::new(0, 0);

    /// Move `distance` unit steps along `axis`.
    ///
    /// Negative distances walk the opposite direction. Returns `None` if the
    /// result falls outside the `i32` domain.
    ///
    /// ```
    /// use infinite_ttt::core::{Axis, Coord};
    ///
    /// let c = Coord::new(2, 3);
    /// assert_eq!(c.offset(Axis::DiagonalDown, 2), Some(Coord::new(4, 5)));
    /// assert_eq!(c.offset(Axis::Horizontal, -3), Some(Coord::new(-1, 3)));
    /// assert_eq!(Coord::new(i32::MAX, 0).offset(Axis::Horizontal, 1), None);
    /// ```
    #[must_use]
    pub fn offset(self, axis: Axis, distance: i64) -> Option<Coord> {
        let (dx, dy) = axis.step();
        let x = i64::from(self.x).checked_add(i64::from(dx).checked_mul(distance)?)?;
        let y = i64::from(self.y).checked_add(i64::from(dy).checked_mul(distance)?)?;
        Some(Coord::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }

    /// Both immediate neighbours along `axis`: `(self + step, self - step)`.
    #[must_use]
    pub fn neighbours(self, axis: Axis) -> (Option<Coord>, Option<Coord>) {
        (self.offset(axis, 1), self.offset(axis, -1))
    }

    /// Largest absolute component, widened so `i32::MIN` is representable.
    #[must_use]
    pub fn magnitude(self) -> i64 {
        i64::from(self.x).abs().max(i64::from(self.y).abs())
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Alignment axis.
///
/// Steps are `(dx, dy)`: a horizontal run varies `x`, a vertical run varies `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Axis {
    /// All four axes in index order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Unit step `(dx, dy)` for this axis.
    #[must_use]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }

    /// Dense index in `0..4`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::DiagonalDown => "diagonal-down",
            Axis::DiagonalUp => "diagonal-up",
        };
        f.write_str(name)
    }
}

/// Per-axis storage with O(1) access by [`Axis`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisMap<T> {
    data: [T; 4],
}

impl<T> AxisMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Axis) -> T) -> Self {
        Self {
            data: Axis::ALL.map(factory),
        }
    }

    /// Iterate over `(Axis, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over mutable entries.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.data[axis.index()]
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.data[axis.index()]
    }
}

//! Player marks and per-mark data storage.
//!
//! ## Mark
//!
//! The symbol a player places. Exactly two exist; `X` moves first by
//! convention, but nothing in the engine enforces alternation.
//!
//! ## MarkMap
//!
//! Fixed two-slot storage indexed by `Mark` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks in index order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The opposing mark.
    ///
    /// ```
    /// use infinite_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::X.other(), Mark::O);
    /// assert_eq!(Mark::O.other(), Mark::X);
    /// ```
    #[must_use]
    pub const fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Dense index in `0..2`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parse a wire symbol. Only `X` and `O` are recognised.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-mark storage with O(1) access.
///
/// ## Example
///
/// ```
/// use infinite_ttt::core::{Mark, MarkMap};
///
/// let mut stones: MarkMap<u32> = MarkMap::with_default();
/// stones[Mark::O] += 3;
/// assert_eq!(stones[Mark::X], 0);
/// assert_eq!(stones[Mark::O], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            data: Mark::ALL.map(factory),
        }
    }

    /// Create with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over `(Mark, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over mutable entries.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        &self.data[mark.index()]
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        &mut self.data[mark.index()]
    }
}

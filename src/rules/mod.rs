//! Win detection.
//!
//! [`WinEngine`] decides, after each single placement, whether the placed
//! stone completed a winning run. It consults an incremental index rather
//! than rescanning the board, so the cost per move is constant regardless
//! of board size or run length.
//!
//! [`scan`] holds the direct board walks used as a reference and to
//! recover the cells of a winning line.

pub mod engine;
pub mod scan;

pub use engine::{MoveOutcome, WinEngine};

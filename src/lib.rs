//! # infinite-ttt
//!
//! Win detection for five-in-a-row on an unbounded grid.
//!
//! ## Design Principles
//!
//! 1. **Incremental**: A placement is resolved by looking only at its
//!    immediate neighbours on each axis. Cost per move does not grow with
//!    the board or with run length.
//!
//! 2. **Sparse**: Only touched cells have entries. The grid is the whole
//!    `i32` plane and is never allocated.
//!
//! 3. **Caller-owned state**: Every game is a value. There are no globals,
//!    so independent sessions never interfere.
//!
//! ## Architecture
//!
//! - **Two interchangeable indices**: [`RunIndex`] anchors run lengths at
//!   run extremes; [`ConnectivityIndex`] tracks runs as union-find
//!   components. Both implement [`WinIndex`] and agree on every move.
//!
//! - **Policy outside the core**: Coordinate bounds and forced wins at a
//!   maximum game length are session options, not engine rules.
//!
//! ## Modules
//!
//! - `core`: Coordinates, axes, marks, configuration, errors
//! - `board`: Sparse occupancy store
//! - `index`: `WinIndex` and its two implementations
//! - `rules`: The win-detection engine and reference board scans
//! - `session`: Game lifecycle and policies
//! - `protocol`: Line protocol shell and player-side helpers

pub mod core;
pub mod board;
pub mod index;
pub mod rules;
pub mod session;
pub mod protocol;

// Re-export commonly used types
pub use crate::core::{
    Axis, AxisMap, Coord,
    Mark, MarkMap,
    SessionConfig, WIN_LENGTH,
    AgentError, ConfigError, PlaceError, ProtocolError,
};

pub use crate::board::BoardStore;

pub use crate::index::{ConnectivityIndex, RunIndex, WinIndex};

pub use crate::rules::{MoveOutcome, WinEngine};

pub use crate::session::{MoveReport, Session, SessionStatus, Verdict};

pub use crate::protocol::{Command, Response, ServeStats, Shell};

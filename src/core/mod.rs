//! Core types: coordinates, axes, marks, configuration, errors.
//!
//! These are the value types every other module speaks in. Nothing here
//! holds game state.

pub mod coord;
pub mod mark;
pub mod config;
pub mod error;

pub use coord::{Axis, AxisMap, Coord};
pub use mark::{Mark, MarkMap};
pub use config::{SessionConfig, DEFAULT_COORDINATE_MARGIN, WIN_LENGTH};
pub use error::{AgentError, ConfigError, PlaceError, ProtocolError};

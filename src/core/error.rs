use thiserror::Error;

use super::coord::Coord;

/// Reasons a placement is refused.
///
/// A refused placement never mutates any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The target cell already holds a mark
    #[error("Cell {at} is already occupied")]
    AlreadyOccupied { at: Coord },

    /// The target cell is beyond the session's coordinate bound
    #[error("Cell {at} is out of bounds: coordinates must stay within {limit}")]
    OutOfBounds { at: Coord, limit: i64 },
}

/// Line-protocol parse failures. These never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Line is neither `RESET` nor `<x> <y> <mark>`
    #[error("Invalid format, got: {line:?}, expected <x> <y> <player>: {reason}")]
    Malformed { line: String, reason: &'static str },
}

/// Session settings that cannot be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A win needs at least one stone
    #[error("Win length must be at least 1")]
    ZeroWinLength,

    /// The coordinate bound would reject every cell
    #[error("Coordinate margin must be positive, got {0}")]
    NonPositiveMargin(i64),

    /// A game cannot end before the first stone
    #[error("Max game length must be positive")]
    ZeroMaxGameLength,
}

/// Failures of the bot-facing move exchange.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Input ended before the opponent sent a move
    #[error("Opponent move not received")]
    OpponentMoveMissing,

    /// Underlying reader failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

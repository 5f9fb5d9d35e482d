//! Session configuration.
//!
//! The core contract only needs a win length. The remaining knobs are
//! policies layered on top by a session:
//! - `coordinate_margin`: reject placements too far from the origin
//! - `max_game_length`: declare the game won once enough stones are down
//!
//! Both are off by default.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Standard run length needed to win.
pub const WIN_LENGTH: u32 = 5;

/// Margin used by the bounded-coordinate engine variant.
pub const DEFAULT_COORDINATE_MARGIN: i64 = 100;

/// Complete session configuration.
///
/// Deserialized values go through [`SessionConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionConfig")]
pub struct SessionConfig {
    /// Contiguous stones along one axis needed to win (at least 1).
    pub win_length: u32,

    /// When set, `|x|` and `|y|` may not exceed `(stones_placed + 1) * margin`.
    pub coordinate_margin: Option<i64>,

    /// When set, the move that brings the stone count to this value wins
    /// regardless of alignment.
    pub max_game_length: Option<usize>,
}

/// Wire shape of `SessionConfig` before validation.
#[derive(Deserialize)]
struct RawSessionConfig {
    win_length: u32,
    coordinate_margin: Option<i64>,
    max_game_length: Option<usize>,
}

impl TryFrom<RawSessionConfig> for SessionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSessionConfig) -> Result<Self, Self::Error> {
        let config = SessionConfig {
            win_length: raw.win_length,
            coordinate_margin: raw.coordinate_margin,
            max_game_length: raw.max_game_length,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            win_length: WIN_LENGTH,
            coordinate_margin: None,
            max_game_length: None,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration: five in a row, no policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the win length.
    #[must_use]
    pub fn with_win_length(mut self, win_length: u32) -> Self {
        assert!(win_length > 0, "Win length must be at least 1");
        self.win_length = win_length;
        self
    }

    /// Reject placements outside `(stones_placed + 1) * margin` on either axis.
    #[must_use]
    pub fn with_coordinate_margin(mut self, margin: i64) -> Self {
        assert!(margin > 0, "Coordinate margin must be positive");
        self.coordinate_margin = Some(margin);
        self
    }

    /// Force a win once `stones` stones have been placed.
    #[must_use]
    pub fn with_max_game_length(mut self, stones: usize) -> Self {
        assert!(stones > 0, "Max game length must be positive");
        self.max_game_length = Some(stones);
        self
    }

    /// Check every setting. The builders enforce the same rules by panicking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_length == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        if let Some(margin) = self.coordinate_margin.filter(|&m| m <= 0) {
            return Err(ConfigError::NonPositiveMargin(margin));
        }
        if self.max_game_length == Some(0) {
            return Err(ConfigError::ZeroMaxGameLength);
        }
        Ok(())
    }

    /// Coordinate limit for the next placement, if bounded.
    ///
    /// Saturates instead of overflowing on very long games.
    #[must_use]
    pub fn coordinate_limit(&self, stones_placed: usize) -> Option<i64> {
        self.coordinate_margin.map(|margin| {
            let stones = i64::try_from(stones_placed).unwrap_or(i64::MAX);
            stones.saturating_add(1).saturating_mul(margin)
        })
    }
}

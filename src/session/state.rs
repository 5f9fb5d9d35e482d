//! One game instance and the policies layered over the engine.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Coord, Mark, PlaceError, SessionConfig};
use crate::index::{RunIndex, WinIndex};
use crate::rules::{MoveOutcome, WinEngine};

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No stone placed.
    Idle,
    /// At least one stone, no win yet.
    InProgress,
    /// Some move won. Terminal until reset.
    Won { winner: Mark },
}

impl SessionStatus {
    /// Check if the game has been won.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Won { .. })
    }
}

/// How an accepted move resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No win; play goes on.
    Continue,
    /// The move completed a winning run.
    Won,
    /// The move reached the maximum game length.
    ForcedWin,
}

impl Verdict {
    /// Check if the move ends the game.
    #[must_use]
    pub fn is_win(self) -> bool {
        !matches!(self, Verdict::Continue)
    }
}

/// Accepted move with its verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    pub verdict: Verdict,
}

/// A single game: board, index, status and policy.
///
/// The session owns all state; nothing is global. Moves are applied
/// strictly one at a time and either complete fully or change nothing.
///
/// Turn order is not enforced and a won session still accepts stones. Its
/// status stays `Won` until [`Session::reset`].
///
/// ## Example
///
/// ```
/// use infinite_ttt::core::{Coord, Mark, SessionConfig};
/// use infinite_ttt::session::{Session, SessionStatus, Verdict};
///
/// let mut session = Session::new(SessionConfig::new());
/// assert_eq!(session.status(), SessionStatus::Idle);
///
/// let report = session.apply(Coord::new(0, 0), Mark::X).unwrap();
/// assert_eq!(report.verdict, Verdict::Continue);
/// assert_eq!(session.status(), SessionStatus::InProgress);
///
/// assert!(session.apply(Coord::new(0, 0), Mark::O).is_err());
/// assert_eq!(session.stone_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session<I = RunIndex> {
    config: SessionConfig,
    engine: WinEngine<I>,
    status: SessionStatus,
}

impl Session<RunIndex> {
    /// Session backed by the run index.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_index(config)
    }
}

impl<I: WinIndex + Default> Session<I> {
    /// Session backed by index type `I`.
    #[must_use]
    pub fn with_index(config: SessionConfig) -> Self {
        let engine = WinEngine::with_win_length(config.win_length);
        Self {
            config,
            engine,
            status: SessionStatus::Idle,
        }
    }

    /// Return to `Idle`, discarding every stone and all index state.
    pub fn reset(&mut self) {
        info!(
            "Resetting session after {} stones ({} index entries)",
            self.engine.stone_count(),
            self.engine.index().entry_count()
        );
        self.engine.reset();
        self.status = SessionStatus::Idle;
    }

    /// Apply a move under the session's policies.
    ///
    /// Rejected moves leave the session exactly as it was.
    pub fn apply(&mut self, at: Coord, mark: Mark) -> Result<MoveReport, PlaceError> {
        if let Some(limit) = self.config.coordinate_limit(self.engine.stone_count()) {
            if at.magnitude() > limit {
                return Err(PlaceError::OutOfBounds { at, limit });
            }
        }

        let outcome = self.engine.apply_move(at, mark)?;

        let verdict = if outcome.is_win() {
            Verdict::Won
        } else if self
            .config
            .max_game_length
            .is_some_and(|max| self.engine.stone_count() >= max)
        {
            debug!("Maximum game length reached at {}", at);
            Verdict::ForcedWin
        } else {
            Verdict::Continue
        };

        self.status = match (self.status, verdict) {
            (SessionStatus::Won { winner }, _) => SessionStatus::Won { winner },
            (_, Verdict::Continue) => SessionStatus::InProgress,
            (_, _) => SessionStatus::Won { winner: mark },
        };

        Ok(MoveReport { outcome, verdict })
    }
}

impl<I: WinIndex> Session<I> {
    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check if a cell holds a stone.
    #[must_use]
    pub fn occupied(&self, at: Coord) -> bool {
        self.engine.occupied(at)
    }

    /// Number of stones placed since the last reset.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.engine.stone_count()
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &WinEngine<I> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ConnectivityIndex;

    #[test]
    fn test_status_transitions() {
        let mut session = Session::new(SessionConfig::new().with_win_length(2));
        assert_eq!(session.status(), SessionStatus::Idle);

        session.apply(Coord::new(0, 0), Mark::X).unwrap();
        assert_eq!(session.status(), SessionStatus::InProgress);

        let report = session.apply(Coord::new(1, 0), Mark::X).unwrap();
        assert_eq!(report.verdict, Verdict::Won);
        assert_eq!(session.status(), SessionStatus::Won { winner: Mark::X });
        assert!(session.status().is_terminal());

        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.stone_count(), 0);
    }

    #[test]
    fn test_won_is_sticky_but_moves_still_apply() {
        let mut session = Session::new(SessionConfig::new().with_win_length(2));
        session.apply(Coord::new(0, 0), Mark::O).unwrap();
        session.apply(Coord::new(0, 1), Mark::O).unwrap();

        let report = session.apply(Coord::new(5, 5), Mark::X).unwrap();
        assert_eq!(report.verdict, Verdict::Continue);
        assert!(session.occupied(Coord::new(5, 5)));
        assert_eq!(session.status(), SessionStatus::Won { winner: Mark::O });
    }

    #[test]
    fn test_rejection_keeps_idle() {
        let mut session = Session::new(SessionConfig::new().with_coordinate_margin(100));
        let err = session.apply(Coord::new(101, 0), Mark::X).unwrap_err();
        assert_eq!(err, PlaceError::OutOfBounds { at: Coord::new(101, 0), limit: 100 });
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.stone_count(), 0);
    }

    #[test]
    fn test_coordinate_bound_widens() {
        let mut session = Session::new(SessionConfig::new().with_coordinate_margin(100));
        session.apply(Coord::new(100, -100), Mark::X).unwrap();
        // One stone down: limit is now 200
        session.apply(Coord::new(0, -200), Mark::O).unwrap();
        assert!(session.apply(Coord::new(301, 0), Mark::X).is_err());
        session.apply(Coord::new(300, 0), Mark::X).unwrap();
    }

    #[test]
    fn test_forced_win_at_max_length() {
        let mut session: Session<ConnectivityIndex> =
            Session::with_index(SessionConfig::new().with_max_game_length(3));
        assert_eq!(session.apply(Coord::new(0, 0), Mark::X).unwrap().verdict, Verdict::Continue);
        assert_eq!(session.apply(Coord::new(9, 9), Mark::O).unwrap().verdict, Verdict::Continue);

        let report = session.apply(Coord::new(-9, 4), Mark::X).unwrap();
        assert_eq!(report.verdict, Verdict::ForcedWin);
        assert!(!report.outcome.is_win());
        assert_eq!(session.status(), SessionStatus::Won { winner: Mark::X });
    }

    #[test]
    fn test_alignment_win_beats_forced_win() {
        let mut session = Session::new(
            SessionConfig::new().with_win_length(2).with_max_game_length(2),
        );
        session.apply(Coord::new(0, 0), Mark::X).unwrap();
        let report = session.apply(Coord::new(1, 1), Mark::X).unwrap();
        assert_eq!(report.verdict, Verdict::Won);
    }

    #[test]
    fn test_verdict_is_win() {
        assert!(!Verdict::Continue.is_win());
        assert!(Verdict::Won.is_win());
        assert!(Verdict::ForcedWin.is_win());
    }
}

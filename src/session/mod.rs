//! Session state machine.
//!
//! A [`Session`] owns one engine and tracks whether the game has been won:
//!
//! ```text
//! Idle --apply--> InProgress --apply (win)--> Won
//!   ^                  |                       |
//!   +------ reset -----+-------- reset --------+
//! ```
//!
//! Policies from [`SessionConfig`](crate::core::SessionConfig) are applied
//! here, never inside the engine.

mod state;

pub use state::{MoveReport, Session, SessionStatus, Verdict};

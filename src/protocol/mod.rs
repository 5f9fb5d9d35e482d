//! Text protocol around a session.
//!
//! One request per line, one response per request:
//!
//! | Request | Response |
//! |---|---|
//! | `RESET` | `OK RESET` |
//! | `<x> <y> <mark>` | `OK WIN`, `OK CONTINUE` or `ERR` |
//! | anything else | `ERR` |
//!
//! `ERR` never changes the session. The reason is logged, not written to
//! the response stream.
//!
//! [`agent`] covers the other side: programs that receive a batch of prior
//! moves and then exchange one move per turn.

pub mod agent;
mod command;
mod shell;

pub use command::{Command, Response};
pub use shell::{ServeStats, Shell};

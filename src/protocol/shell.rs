//! Line-oriented request/response loop.

use std::io::{self, BufRead, Write};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{ProtocolError, SessionConfig};
use crate::index::{RunIndex, WinIndex};
use crate::session::Session;

use super::command::{Command, Response};

/// Counters for one `serve` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeStats {
    /// Lines read.
    pub commands: u64,
    /// Placements accepted.
    pub accepted: u64,
    /// Lines answered with `ERR`.
    pub rejected: u64,
    /// `RESET` lines handled.
    pub resets: u64,
}

/// Serves the text protocol against a single session.
///
/// ## Example
///
/// ```
/// use infinite_ttt::core::SessionConfig;
/// use infinite_ttt::protocol::Shell;
///
/// let mut shell = Shell::new(SessionConfig::new());
/// let input = b"0 0 X\n0 0 O\nRESET\n";
/// let mut output = Vec::new();
///
/// let stats = shell.serve(&input[..], &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "OK CONTINUE\nERR\nOK RESET\n");
/// assert_eq!(stats.rejected, 1);
/// ```
pub struct Shell<I = RunIndex> {
    session: Session<I>,
    stats: ServeStats,
}

impl Shell<RunIndex> {
    /// Shell over a run-index session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_index(config)
    }
}

impl<I: WinIndex + Default> Shell<I> {
    /// Shell over a session backed by index type `I`.
    #[must_use]
    pub fn with_index(config: SessionConfig) -> Self {
        Self {
            session: Session::with_index(config),
            stats: ServeStats::default(),
        }
    }

    /// Answer one request line.
    ///
    /// Malformed lines and refused moves are logged and answered with
    /// [`Response::Error`]; the session is left untouched.
    pub fn handle_line(&mut self, line: &str) -> Response {
        self.stats.commands += 1;

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                warn!("{}", err);
                self.stats.rejected += 1;
                return Response::Error;
            }
        };

        match command {
            Command::Reset => {
                self.session.reset();
                self.stats.resets += 1;
                Response::Reset
            }
            Command::Place { at, mark } => match self.session.apply(at, mark) {
                Ok(report) => {
                    self.stats.accepted += 1;
                    if report.verdict.is_win() {
                        Response::Win
                    } else {
                        Response::Continue
                    }
                }
                Err(err) => {
                    warn!("Invalid move: {}", err);
                    self.stats.rejected += 1;
                    Response::Error
                }
            },
        }
    }

    fn reject_unreadable(&mut self, raw: &[u8]) -> Response {
        self.stats.commands += 1;
        self.stats.rejected += 1;
        let err = ProtocolError::Malformed {
            line: String::from_utf8_lossy(raw).trim_end().to_string(),
            reason: "line is not valid UTF-8",
        };
        warn!("{}", err);
        Response::Error
    }

    /// Answer every line of `input` on `output` until end of input.
    ///
    /// Lines that are not UTF-8 are answered with [`Response::Error`] like
    /// any other malformed line. Each response is flushed as soon as it is
    /// written. Returns the
    /// counters accumulated during this call.
    pub fn serve<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<ServeStats> {
        self.stats = ServeStats::default();
        info!("Serving with {} index", I::NAME);

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let response = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line.trim_end_matches(['\r', '\n'])),
                Err(_) => self.reject_unreadable(&buf),
            };
            writeln!(output, "{}", response)?;
            output.flush()?;
        }

        info!(
            "Input closed after {} commands ({} accepted, {} rejected, {} resets)",
            self.stats.commands, self.stats.accepted, self.stats.rejected, self.stats.resets
        );
        Ok(self.stats)
    }
}

impl<I> Shell<I> {
    /// The session being served.
    #[must_use]
    pub fn session(&self) -> &Session<I> {
        &self.session
    }

    /// Counters since the last `serve` started.
    #[must_use]
    pub fn stats(&self) -> ServeStats {
        self.stats
    }
}

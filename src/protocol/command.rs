//! Request and response lines.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Mark, ProtocolError};

/// A parsed request line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `RESET`
    Reset,
    /// `<x> <y> <mark>`
    Place { at: Coord, mark: Mark },
}

impl Command {
    /// Parse one request line.
    ///
    /// Surrounding whitespace is ignored. A placement must have exactly three
    /// tokens: two `i32` coordinates and a single-character mark.
    ///
    /// ```
    /// use infinite_ttt::core::{Coord, Mark};
    /// use infinite_ttt::protocol::Command;
    ///
    /// assert_eq!(Command::parse("RESET").unwrap(), Command::Reset);
    /// assert_eq!(
    ///     Command::parse("-3 7 O").unwrap(),
    ///     Command::Place { at: Coord::new(-3, 7), mark: Mark::O }
    /// );
    /// assert!(Command::parse("3 7").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Command, ProtocolError> {
        let trimmed = line.trim();
        let malformed = |reason| ProtocolError::Malformed {
            line: line.to_string(),
            reason,
        };

        if trimmed == "RESET" {
            return Ok(Command::Reset);
        }

        let mut tokens = trimmed.split_whitespace();
        let (Some(x), Some(y), Some(mark), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(malformed("expected exactly three fields"));
        };

        let x: i32 = x.parse().map_err(|_| malformed("x is not a 32-bit integer"))?;
        let y: i32 = y.parse().map_err(|_| malformed("y is not a 32-bit integer"))?;

        let mut symbols = mark.chars();
        let mark = match (symbols.next(), symbols.next()) {
            (Some(symbol), None) => Mark::from_symbol(symbol),
            _ => None,
        }
        .ok_or_else(|| malformed("mark must be X or O"))?;

        Ok(Command::Place {
            at: Coord::new(x, y),
            mark,
        })
    }
}

/// A response line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// State cleared.
    Reset,
    /// Move accepted and the game is won.
    Win,
    /// Move accepted, no win.
    Continue,
    /// Line rejected; state unchanged.
    Error,
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Response::Reset => "OK RESET",
            Response::Win => "OK WIN",
            Response::Continue => "OK CONTINUE",
            Response::Error => "ERR",
        };
        f.write_str(text)
    }
}

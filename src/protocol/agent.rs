//! Plumbing for programs that play through the engine.
//!
//! A player process first receives the moves made so far, one
//! `<x> <y> <mark>` line each, terminated by `END`. After that it writes one
//! `<x> <y>` line per turn and reads the opponent's reply the same way.
//! Choosing moves is up to the player; these helpers only handle the
//! exchange and keep a local session in sync.

use std::io::BufRead;

use log::debug;

use crate::core::{AgentError, Coord, Mark};
use crate::index::WinIndex;
use crate::session::Session;

/// Line that ends the initial batch.
pub const END_OF_BATCH: &str = "END";

/// Moves received before play starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialState {
    /// Prior moves in the order they were made.
    pub moves: Vec<(Coord, Mark)>,
    /// Mark the receiving player plays with.
    pub to_move: Mark,
}

impl InitialState {
    /// Apply the batch to `session`, skipping moves the session refuses.
    ///
    /// Returns how many moves were applied.
    pub fn replay_into<I: WinIndex + Default>(&self, session: &mut Session<I>) -> usize {
        let mut applied = 0;
        for &(at, mark) in &self.moves {
            match session.apply(at, mark) {
                Ok(_) => applied += 1,
                Err(err) => debug!("Skipping prior move: {}", err),
            }
        }
        applied
    }
}

fn parse_prior_move(line: &str) -> Option<(Coord, Mark)> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let mark = Mark::from_symbol(tokens.next()?.chars().next()?)?;
    Some((Coord::new(x, y), mark))
}

/// Read the initial batch up to `END` or end of input.
///
/// Lines that are not `<x> <y> <mark>` are ignored. The player to move is
/// the opponent of whoever moved last, or `X` if nobody has.
pub fn read_initial_state<R: BufRead>(reader: &mut R) -> Result<InitialState, AgentError> {
    let mut state = InitialState {
        moves: Vec::new(),
        to_move: Mark::X,
    };

    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        let line = String::from_utf8_lossy(&buf);
        if line.trim() == END_OF_BATCH {
            break;
        }
        if let Some((at, mark)) = parse_prior_move(&line) {
            state.moves.push((at, mark));
            state.to_move = mark.other();
        }
        buf.clear();
    }

    Ok(state)
}

/// Leading integer of `text` after optional whitespace, with the remainder.
fn scan_int(text: &str) -> Option<(i32, &str)> {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..].bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let (number, rest) = text.split_at(sign + digits);
    Some((number.parse().ok()?, rest))
}

/// Read the opponent's next move, skipping lines that do not start with
/// two integers. Anything after the second integer is ignored, so
/// `3 4abc` reads as `(3, 4)`.
pub fn read_opponent_move<R: BufRead>(reader: &mut R) -> Result<Coord, AgentError> {
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        let line = String::from_utf8_lossy(&buf);
        let parsed = scan_int(&line).and_then(|(x, rest)| scan_int(rest).map(|(y, _)| (x, y)));
        if let Some((x, y)) = parsed {
            return Ok(Coord::new(x, y));
        }
        buf.clear();
    }
    Err(AgentError::OpponentMoveMissing)
}

/// Wire form of a move submission.
#[must_use]
pub fn format_move(at: Coord) -> String {
    format!("{} {}", at.x, at.y)
}

//! Transcript ("score sheet") format
//!
//! A transcript is one line of comma-separated fields:
//!
//! ```text
//! 3,1:7:7,2:6:6,1:8:8
//! ```
//!
//! The first field is the number of recorded turns N, followed by N
//! `P:X:Y` fields where `P` is the player number (1 = First, 2 = Second)
//! and `X`, `Y` are row and column. A pass is written with both
//! coordinates set to `-1`. The line ends with a newline.
//!
//! Loading replays every recorded move through [`Renju::add_move`], so a
//! transcript can never produce a position the engine would refuse.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::board::{Player, Pos};
use crate::engine::{Entry, IllegalMovePolicy, Move, Renju};
use crate::error::TranscriptError;

/// Coordinate written for both axes of a pass
pub const PASS_COORD: i32 = -1;

/// Encode the game's history as a transcript line (with trailing newline).
pub fn encode(renju: &Renju) -> String {
    let mut fields = Vec::with_capacity(renju.turn() + 1);
    fields.push(renju.turn().to_string());

    for (turn, entry) in renju.history().iter().enumerate() {
        let field = match *entry {
            Entry::Stone { pos, player } => {
                format!("{}:{}:{}", player.number(), pos.row(), pos.col())
            }
            Entry::Pass => format!(
                "{}:{PASS_COORD}:{PASS_COORD}",
                Player::for_turn(turn).number()
            ),
        };
        fields.push(field);
    }

    let mut line = fields.join(",");
    line.push('\n');
    line
}

fn parse_int(field: usize, text: &str, what: &str) -> Result<i32, TranscriptError> {
    text.trim()
        .parse()
        .map_err(|_| TranscriptError::parse(field, format!("invalid {what} {text:?}")))
}

fn decode_entry(field: usize, text: &str) -> Result<Entry, TranscriptError> {
    let parts: Vec<&str> = text.split(':').collect();
    let [p, x, y] = parts.as_slice() else {
        return Err(TranscriptError::parse(
            field,
            format!("expected P:X:Y, got {text:?}"),
        ));
    };

    let number = parse_int(field, p, "player")?;
    let player = u8::try_from(number)
        .ok()
        .and_then(Player::from_number)
        .ok_or_else(|| TranscriptError::parse(field, format!("unknown player {number}")))?;

    let (row, col) = (parse_int(field, x, "row")?, parse_int(field, y, "column")?);
    if row == PASS_COORD && col == PASS_COORD {
        return Ok(Entry::Pass);
    }

    let pos = Pos::new(row, col).map_err(|e| TranscriptError::parse(field, e.to_string()))?;
    Ok(Entry::Stone { pos, player })
}

/// Parse a transcript line into its entries, without replaying them.
pub fn decode(line: &str) -> Result<Vec<Entry>, TranscriptError> {
    let line = line.trim();
    let mut fields = line.split(',');

    let count_text = fields.next().unwrap_or_default();
    let count: usize = count_text
        .trim()
        .parse()
        .map_err(|_| TranscriptError::parse(0, format!("invalid move count {count_text:?}")))?;

    let entries = fields
        .enumerate()
        .map(|(i, text)| decode_entry(i + 1, text))
        .collect::<Result<Vec<_>, _>>()?;

    if entries.len() != count {
        return Err(TranscriptError::parse(
            0,
            format!("move count says {count} but {} moves follow", entries.len()),
        ));
    }
    Ok(entries)
}

/// Rebuild a game by playing `entries` in order.
///
/// Stops at the first entry the engine refuses; `index` in the error is
/// the 1-based move number.
pub fn replay(entries: &[Entry], policy: IllegalMovePolicy) -> Result<Renju, TranscriptError> {
    let mut renju = Renju::with_policy(policy);
    for (i, entry) in entries.iter().enumerate() {
        let result = match *entry {
            Entry::Stone { pos, player } => renju.add_move(Move::by(pos, player)),
            Entry::Pass => renju.pass_turn(),
        };
        result.map_err(|source| TranscriptError::Replay {
            index: i + 1,
            source,
        })?;
    }
    Ok(renju)
}

/// Decode and replay a transcript line.
pub fn parse(line: &str, policy: IllegalMovePolicy) -> Result<Renju, TranscriptError> {
    replay(&decode(line)?, policy)
}

/// Write the transcript file, replacing any previous content.
#[instrument(skip_all, fields(path = %path.as_ref().display(), turn = renju.turn()))]
pub fn dump(path: impl AsRef<Path>, renju: &Renju) -> Result<(), TranscriptError> {
    fs::write(path.as_ref(), encode(renju))?;
    debug!("Transcript written");
    Ok(())
}

/// Read a transcript file and replay it into a new game.
#[instrument(skip_all, fields(path = %path.as_ref().display(), ?policy))]
pub fn load(path: impl AsRef<Path>, policy: IllegalMovePolicy) -> Result<Renju, TranscriptError> {
    let text = fs::read_to_string(path.as_ref())?;
    let line = text.lines().next().unwrap_or_default();
    let renju = parse(line, policy)?;
    debug!(turn = renju.turn(), "Transcript loaded");
    Ok(renju)
}

//! Line-oriented text codec for the board.
//!
//! A board serializes as rows joined by newlines; within a row, squares
//! are joined by `|`. Each square is a fixed-width token `NNps`: a
//! zero-padded unit count, the owner marker (`.` or `a..t`), and the
//! square-type marker (`.` normal, `+` resource).
//!
//! The codec round-trips exactly: `parse(serialize(b)) == b` for every
//! board, and `serialize(parse(s)) == s` for every accepted blob.

use crate::error::{EngineError, EngineResult};
use crate::game::{player_from_marker, player_marker, Board, Coord, Square, NEUTRAL_MARKER};

/// Digit width of the unit count in a square token. Fixed per format
/// version; changing it breaks replay of stored games.
pub const UNIT_WIDTH: usize = 2;

/// Largest unit count the token format can carry.
pub const MAX_ENCODABLE_UNITS: u32 = 99;

/// Marker for a normal square.
const NORMAL_MARKER: char = '.';

/// Marker for a resource square.
const RESOURCE_MARKER: char = '+';

/// Serialize a board to its wire blob.
///
/// # Panics
///
/// Panics if any square holds more units than the format can encode.
/// The config validator and the game invariants keep unit counts inside
/// the encodable range, so hitting this is an engine bug.
#[must_use]
pub fn serialize(board: &Board) -> String {
    let size = usize::from(board.size());
    let mut rows = Vec::with_capacity(size);
    let mut row = Vec::with_capacity(size);

    for (coord, square) in board.iter() {
        assert!(
            square.units <= MAX_ENCODABLE_UNITS,
            "square {coord} holds {} units, above the encodable maximum {MAX_ENCODABLE_UNITS}",
            square.units,
        );
        let owner = square
            .owner
            .and_then(player_marker)
            .unwrap_or(NEUTRAL_MARKER);
        let kind = if square.is_resource {
            RESOURCE_MARKER
        } else {
            NORMAL_MARKER
        };
        row.push(format!("{:0width$}{owner}{kind}", square.units, width = UNIT_WIDTH));

        if row.len() == size {
            rows.push(row.join("|"));
            row = Vec::with_capacity(size);
        }
    }

    rows.join("\n")
}

/// Parse a wire blob back into a board.
///
/// # Errors
///
/// Returns `InvalidGridFormat` naming the first offending token when the
/// input is empty, non-square, or contains a malformed token.
pub fn parse(input: &str) -> EngineResult<Board> {
    if input.trim().is_empty() {
        return Err(EngineError::InvalidGridFormat {
            detail: "input is empty".to_string(),
        });
    }

    // split, not lines(): a trailing newline or CR must fail the token
    // checks rather than silently round-trip to a different blob.
    let lines: Vec<&str> = input.split('\n').collect();
    let size = lines.len();
    if size < 2 || size > usize::from(u16::MAX) {
        return Err(EngineError::InvalidGridFormat {
            detail: format!("board dimension {size} is outside the supported range"),
        });
    }

    let mut board = Board::new(size as u16).ok_or_else(|| EngineError::InvalidGridFormat {
        detail: format!("board dimension {size} is below the minimum of 2"),
    })?;

    for (y, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split('|').collect();
        if tokens.len() != size {
            return Err(EngineError::InvalidGridFormat {
                detail: format!(
                    "row {y} has {} squares, expected {size}",
                    tokens.len()
                ),
            });
        }

        for (x, token) in tokens.iter().enumerate() {
            let square = parse_token(token, x, y)?;
            board.set(Coord::new(x as u16, y as u16), square);
        }
    }

    Ok(board)
}

/// Parse one fixed-width square token.
fn parse_token(token: &str, x: usize, y: usize) -> EngineResult<Square> {
    let bad = |reason: String| EngineError::InvalidGridFormat {
        detail: format!("square ({x}, {y}) token '{token}': {reason}"),
    };

    let chars: Vec<char> = token.chars().collect();
    if chars.len() != UNIT_WIDTH + 2 {
        return Err(bad(format!(
            "expected {} characters, found {}",
            UNIT_WIDTH + 2,
            chars.len()
        )));
    }

    let digits: String = chars[..UNIT_WIDTH].iter().collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(bad(format!("unit count '{digits}' is not decimal")));
    }
    let units: u32 = digits
        .parse()
        .map_err(|_| bad(format!("unit count '{digits}' is not decimal")))?;

    let owner_char = chars[UNIT_WIDTH];
    let owner = if owner_char == NEUTRAL_MARKER {
        None
    } else {
        Some(player_from_marker(owner_char).ok_or_else(|| {
            bad(format!("unknown owner marker '{owner_char}'"))
        })?)
    };

    let is_resource = match chars[UNIT_WIDTH + 1] {
        NORMAL_MARKER => false,
        RESOURCE_MARKER => true,
        other => return Err(bad(format!("unknown square-type marker '{other}'"))),
    };

    // The board invariant: a square is neutral exactly when it is empty.
    match owner {
        None if units != 0 => Err(bad(format!("neutral square carries {units} units"))),
        Some(_) if units == 0 => Err(bad("owned square carries 0 units".to_string())),
        _ => Ok(Square {
            units,
            owner,
            is_resource,
        }),
    }
}

impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&serialize(self))
    }
}

impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let blob = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse(&blob).map_err(serde::de::Error::custom)
    }
}

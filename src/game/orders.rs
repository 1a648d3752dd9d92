//! Order parsing and validation.
//!
//! One line of text per player per round: `|`-separated order tokens,
//! each a `x,y,d,u` 4-tuple. An empty or whitespace line means "no
//! orders". Validation is pure over `(line, player, board, config)` —
//! the board is never mutated here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::game::{Board, Coord, Direction, GameConfig, PlayerId};

/// A player-issued intent to move units off a square they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Source square.
    pub from: Coord,
    /// Movement direction.
    pub direction: Direction,
    /// Units to move. Always positive.
    pub units: u32,
}

/// A validated order decomposed into its mechanical effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Source square.
    pub from: Coord,
    /// Destination square.
    pub to: Coord,
    /// The player moving.
    pub owner: PlayerId,
    /// Units in motion.
    pub units: u32,
}

/// Why an orders line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A token was not a structurally valid `x,y,d,u` 4-tuple.
    Parse {
        /// The offending token, verbatim.
        token: String,
        /// Why it failed.
        reason: String,
    },
    /// The line carried more orders than the per-round bound.
    TooManyOrders {
        /// How many were submitted.
        submitted: usize,
        /// The configured bound.
        max: usize,
    },
    /// The source coordinate is not on the board.
    SourceOutOfBounds {
        /// Submitted x.
        x: i64,
        /// Submitted y.
        y: i64,
    },
    /// The destination square would fall off the board.
    TargetOutOfBounds {
        /// Source square.
        from: Coord,
        /// Attempted direction.
        direction: Direction,
    },
    /// The source square is not owned by the submitting player.
    NotYourSquare {
        /// The contested square.
        coord: Coord,
    },
    /// The player's orders from one square add up to more units than the
    /// square holds.
    InsufficientUnits {
        /// The over-drawn square.
        coord: Coord,
        /// Running total requested across the line so far.
        requested: u32,
        /// Units actually available before orders execute.
        available: u32,
    },
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::Parse { token, reason } => {
                write!(f, "cannot parse order '{token}': {reason}")
            }
            OrderError::TooManyOrders { submitted, max } => {
                write!(f, "{submitted} orders submitted, at most {max} allowed")
            }
            OrderError::SourceOutOfBounds { x, y } => {
                write!(f, "source ({x}, {y}) is off the board")
            }
            OrderError::TargetOutOfBounds { from, direction } => {
                write!(f, "moving {direction} from {from} leaves the board")
            }
            OrderError::NotYourSquare { coord } => {
                write!(f, "square {coord} is not yours")
            }
            OrderError::InsufficientUnits {
                coord,
                requested,
                available,
            } => {
                write!(
                    f,
                    "orders from {coord} total {requested} units but only {available} are available"
                )
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl From<OrderError> for EngineError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Parse { token, reason } => EngineError::ParseError { token, reason },
            other => EngineError::ValidationError {
                detail: other.to_string(),
            },
        }
    }
}

/// Parse and validate one player's orders line against the pre-order
/// board.
///
/// Tokens are validated in submission order; the first failure rejects
/// the whole line. The cumulative-availability check tracks, per source
/// square, the running sum of units requested across the line and fails
/// as soon as the total overdraws the square.
///
/// # Errors
///
/// Returns the first [`OrderError`] encountered.
pub fn parse_orders(
    line: &str,
    player: PlayerId,
    board: &Board,
    config: &GameConfig,
) -> Result<Vec<Order>, OrderError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = line.split('|').collect();
    if tokens.len() > config.max_orders_per_round {
        return Err(OrderError::TooManyOrders {
            submitted: tokens.len(),
            max: config.max_orders_per_round,
        });
    }

    let mut orders = Vec::with_capacity(tokens.len());
    let mut committed: HashMap<Coord, u32> = HashMap::new();

    for raw in tokens {
        let token = raw.trim();
        let order = parse_token(token, board.size())?;

        let Some(square) = board.get(order.from) else {
            return Err(OrderError::SourceOutOfBounds {
                x: i64::from(order.from.x),
                y: i64::from(order.from.y),
            });
        };
        if square.owner != Some(player) {
            return Err(OrderError::NotYourSquare { coord: order.from });
        }

        let running = committed.entry(order.from).or_insert(0);
        *running += order.units;
        if *running > square.units {
            return Err(OrderError::InsufficientUnits {
                coord: order.from,
                requested: *running,
                available: square.units,
            });
        }

        orders.push(order);
    }

    Ok(orders)
}

/// Parse a single `x,y,d,u` token and bounds-check it.
fn parse_token(token: &str, size: u16) -> Result<Order, OrderError> {
    let parse_err = |reason: String| OrderError::Parse {
        token: token.to_string(),
        reason,
    };

    if token.is_empty() {
        return Err(parse_err("empty order token".to_string()));
    }

    let parts: Vec<&str> = token.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(parse_err(format!(
            "expected 4 comma-separated fields, found {}",
            parts.len()
        )));
    }

    let x: i64 = parts[0]
        .parse()
        .map_err(|_| parse_err(format!("x '{}' is not an integer", parts[0])))?;
    let y: i64 = parts[1]
        .parse()
        .map_err(|_| parse_err(format!("y '{}' is not an integer", parts[1])))?;

    let mut direction_chars = parts[2].chars();
    let direction = match (direction_chars.next(), direction_chars.next()) {
        (Some(letter), None) => Direction::from_letter(letter)
            .ok_or_else(|| parse_err(format!("unknown direction '{}'", parts[2])))?,
        _ => return Err(parse_err(format!("unknown direction '{}'", parts[2]))),
    };

    let units: u32 = parts[3]
        .parse()
        .map_err(|_| parse_err(format!("unit count '{}' is not a positive integer", parts[3])))?;
    if units == 0 {
        return Err(parse_err("unit count must be positive".to_string()));
    }

    if x < 0 || y < 0 || x >= i64::from(size) || y >= i64::from(size) {
        return Err(OrderError::SourceOutOfBounds { x, y });
    }
    let from = Coord::new(x as u16, y as u16);

    if from.neighbor(direction, size).is_none() {
        return Err(OrderError::TargetOutOfBounds { from, direction });
    }

    Ok(Order {
        from,
        direction,
        units,
    })
}

/// Decompose validated orders-by-player into movements.
///
/// # Errors
///
/// Returns `Bug` if any order's destination falls off the board — the
/// validator guarantees it cannot.
pub fn to_movements(
    orders_by_player: &[Vec<Order>],
    size: u16,
) -> Result<Vec<Movement>, EngineError> {
    let mut movements = Vec::new();
    for (player, orders) in orders_by_player.iter().enumerate() {
        for order in orders {
            let to = order
                .from
                .neighbor(order.direction, size)
                .ok_or_else(|| EngineError::Bug {
                    detail: format!(
                        "validated order from {} moving {} has no destination",
                        order.from, order.direction
                    ),
                })?;
            movements.push(Movement {
                from: order.from,
                to,
                owner: player as PlayerId,
                units: order.units,
            });
        }
    }
    Ok(movements)
}

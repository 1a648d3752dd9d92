//! Game layer for gridwar.
//!
//! Implements the round-based rules:
//! - Board of squares with owners, units, and resource markers
//! - Text codec for the board wire format
//! - Order parsing and validation against the pre-order board
//! - Simultaneous movement with global source debit
//! - Per-square combat resolution
//! - Threshold-gated production
//! - Terminal-condition evaluation and the round driver

pub mod codec;

mod board;
mod combat;
mod config;
mod invariants;
mod orders;
mod player;
mod production;
mod round;
mod setup;
mod state;
mod verdict;

pub use board::{Board, Coord, Direction, Square};
pub use combat::{apply_source_debits, resolve_combat};
pub use config::GameConfig;
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use orders::{parse_orders, to_movements, Movement, Order, OrderError};
pub use player::{
    player_from_marker, player_marker, PlayerId, MAX_PLAYERS, NEUTRAL_MARKER,
};
pub use production::apply_production;
pub use round::{OrderPolicy, RoundPhase, RoundRecord};
pub use setup::initialize;
pub use state::GameState;
pub use verdict::{evaluate_verdict, Verdict};

// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Gridwar: a deterministic engine for a simultaneous-action territorial
//! strategy contest on a square grid.
//!
//! Three to twenty agents submit free-text declarations and movement
//! orders each round. The engine atomically resolves all orders, fights
//! combats at every destination square, grants production, evaluates
//! terminal conditions, and records an append-only history sufficient to
//! replay or audit the match.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      CLI / host shell (store,       │
//! │      render, stdin collection)      │
//! ├─────────────────────────────────────┤
//! │   Round driver (phases, verdict)    │
//! ├─────────────────────────────────────┤
//! │  Core rules (orders, movement,      │
//! │  combat, production, codec)         │
//! └─────────────────────────────────────┘
//! ```
//!
//! The core is single-threaded and synchronous. Every operation is a
//! pure function of its inputs; only initial setup draws on a seeded
//! random source, so a game is fully replayable from its seed, config,
//! and order history.

pub mod error;
pub mod game;
pub mod render;
pub mod store;

pub use error::{EngineError, EngineResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Coord, Direction, GameConfig, GameState, Order, OrderPolicy, PlayerId, RoundPhase,
    RoundRecord, Square, Verdict,
};

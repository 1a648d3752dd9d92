//! Output formatting utilities for the CLI.

use serde::Serialize;

use gridwar::game::{player_marker, PlayerId};
use gridwar::{GameState, Verdict};

/// JSON-serializable game snapshot.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameSnapshot {
    /// Game identifier.
    pub(super) game_id: String,
    /// Current round number.
    pub(super) round: u32,
    /// Round limit.
    pub(super) max_rounds: u32,
    /// Current phase, human-readable.
    pub(super) phase: String,
    /// Verdict so far.
    pub(super) verdict: Verdict,
    /// Per-player summaries.
    pub(super) players: Vec<JsonPlayerSnapshot>,
    /// Latest board in the wire format.
    pub(super) board: String,
}

/// JSON-serializable per-player summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerSnapshot {
    /// Player marker letter.
    pub(super) marker: char,
    /// Total units on the board.
    pub(super) units: u64,
}

impl JsonGameSnapshot {
    /// Create from a game state.
    pub(super) fn from_state(state: &GameState) -> Self {
        let totals = state.unit_totals().unwrap_or_default();
        let board = state
            .latest_round()
            .map(|round| gridwar::game::codec::serialize(&round.board))
            .unwrap_or_default();
        let phase = state
            .phase()
            .map(|p| p.to_string())
            .unwrap_or_else(|e| e.to_string());

        Self {
            game_id: state.game_id.clone(),
            round: state.current_round,
            max_rounds: state.config.max_rounds,
            phase,
            verdict: state.verdict.clone(),
            players: totals
                .iter()
                .enumerate()
                .map(|(player, &units)| JsonPlayerSnapshot {
                    marker: player_marker(player as PlayerId).unwrap_or('?'),
                    units,
                })
                .collect(),
            board,
        }
    }
}

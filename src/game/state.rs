//! Game state.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::game::{GameConfig, RoundRecord, Verdict};

/// Complete state of one game: configuration, the append-only round
/// history, and the verdict.
///
/// The last element of `rounds` is the round whose orders have not yet
/// resolved. Once the verdict turns terminal the history freezes and the
/// last element remains the final pre-resolution snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Host-assigned identifier for this game.
    pub game_id: String,
    /// The rules this game was created with.
    pub config: GameConfig,
    /// Number of players; ordinals `0..num_players` map to markers
    /// `a..`.
    pub num_players: u8,
    /// Seed used for initial setup. Together with the order history it
    /// makes the whole game replayable.
    pub seed: u64,
    /// 1-based number of the round currently in progress. Kept equal to
    /// `rounds.len()`.
    pub current_round: u32,
    /// Append-only round history.
    pub rounds: Vec<RoundRecord>,
    /// Outcome so far.
    pub verdict: Verdict,
}

impl GameState {
    /// The round currently accepting declarations or orders.
    ///
    /// # Errors
    ///
    /// Returns `Bug` if the round history is empty, which setup makes
    /// impossible.
    pub fn latest_round(&self) -> EngineResult<&RoundRecord> {
        self.rounds.last().ok_or_else(|| EngineError::Bug {
            detail: format!("game '{}' has no rounds", self.game_id),
        })
    }

    /// Mutable access to the round currently in progress.
    ///
    /// # Errors
    ///
    /// Returns `Bug` if the round history is empty.
    pub fn latest_round_mut(&mut self) -> EngineResult<&mut RoundRecord> {
        if self.rounds.is_empty() {
            return Err(EngineError::Bug {
                detail: format!("game '{}' has no rounds", self.game_id),
            });
        }
        let last = self.rounds.len() - 1;
        Ok(&mut self.rounds[last])
    }

    /// Per-player unit totals on the latest board.
    ///
    /// # Errors
    ///
    /// Returns `Bug` if the round history is empty.
    pub fn unit_totals(&self) -> EngineResult<Vec<u64>> {
        Ok(self.latest_round()?.board.unit_totals(self.num_players))
    }

    /// Whether the game has reached a terminal verdict.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.verdict.is_terminal()
    }
}

//! Per-round production.

use crate::game::{Board, GameConfig};

/// Grant production on the combat-resolved board.
///
/// Every owned square below `production_cap` gains `resource_production`
/// if it is a resource square, otherwise `base_production`. The cap is a
/// pre-production threshold, not a clamp: a square at `cap - 1` still
/// receives its full grant and may finish above the cap. Neutral squares
/// never produce.
pub fn apply_production(board: &mut Board, config: &GameConfig) {
    for (_, square) in board.iter_mut() {
        if square.owner.is_none() {
            continue;
        }
        if square.units >= config.production_cap {
            continue;
        }
        square.units += if square.is_resource {
            config.resource_production
        } else {
            config.base_production
        };
    }
}

//! Initial game setup.
//!
//! The only place the engine consumes randomness. Every game records its
//! seed, so setup — and with it the whole game — is reproducible.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{EngineError, EngineResult};
use crate::game::{Board, GameConfig, GameState, PlayerId, RoundRecord, Square, Verdict};

/// Create a new game: randomized edge placement, resource marking, and
/// the round-1 record.
///
/// # Errors
///
/// Returns `InvalidConfig` if the configuration fails validation, the
/// player count is outside the configured bounds, or the board edge
/// cannot seat every player.
pub fn initialize(
    game_id: &str,
    num_players: u8,
    config: GameConfig,
    seed: u64,
) -> EngineResult<GameState> {
    config.validate()?;

    if num_players < config.min_players || num_players > config.max_players {
        return Err(EngineError::InvalidConfig {
            reason: format!(
                "player count {num_players} is outside the configured bounds {}..={}",
                config.min_players, config.max_players
            ),
        });
    }

    let mut edge = Board::edge_coords(config.map_size);
    if edge.len() < usize::from(num_players) {
        return Err(EngineError::InvalidConfig {
            reason: format!(
                "a {0}×{0} board has only {1} edge squares for {num_players} players",
                config.map_size,
                edge.len()
            ),
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    edge.shuffle(&mut rng);
    let starts = &edge[..usize::from(num_players)];

    let mut board = Board::new(config.map_size).ok_or_else(|| EngineError::Bug {
        detail: format!("validated map_size {} rejected by Board::new", config.map_size),
    })?;
    for (player, &coord) in starts.iter().enumerate() {
        board.set(coord, Square::held(player as PlayerId, config.starting_units));
    }

    // Resource squares go anywhere except a starting square.
    let mut candidates: Vec<_> = board
        .iter()
        .map(|(coord, _)| coord)
        .filter(|coord| !starts.contains(coord))
        .collect();
    candidates.shuffle(&mut rng);

    let slots = config.resource_square_count().min(candidates.len());
    for &coord in &candidates[..slots] {
        if let Some(square) = board.get_mut(coord) {
            square.is_resource = true;
        }
    }

    Ok(GameState {
        game_id: game_id.to_string(),
        config,
        num_players,
        seed,
        current_round: 1,
        rounds: vec![RoundRecord::fresh(1, board)],
        verdict: Verdict::Ongoing,
    })
}

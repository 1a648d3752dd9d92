//! Init command implementation.

use std::path::PathBuf;

use super::CliError;
use gridwar::game::initialize;
use gridwar::render::render_state;
use gridwar::store::GameStore;
use gridwar::GameConfig;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the game already
/// exists.
pub(crate) fn execute(
    games_dir: PathBuf,
    game_id: String,
    num_players: u8,
    seed: Option<u64>,
    map_size: Option<u16>,
    max_rounds: Option<u32>,
    starting_units: Option<u32>,
) -> Result<(), CliError> {
    let mut config = GameConfig::default();
    if let Some(map_size) = map_size {
        config.map_size = map_size;
    }
    if let Some(max_rounds) = max_rounds {
        config.max_rounds = max_rounds;
    }
    if let Some(starting_units) = starting_units {
        config.starting_units = starting_units;
    }

    // Generate a seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let state = initialize(&game_id, num_players, config, seed)?;

    let store = GameStore::new(games_dir);
    store.create(&state)?;

    println!("Created game '{game_id}' with {num_players} players (seed {seed})");
    println!();
    print!("{}", render_state(&state, true));
    Ok(())
}

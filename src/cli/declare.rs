//! Declare command implementation.

use std::path::PathBuf;

use super::{read_player_lines, CliError};
use gridwar::store::GameStore;

/// Execute the declare command: read one declaration line per player
/// from stdin and record them on the current round.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded, the round is not in a
/// declaration phase, or saving fails.
pub(crate) fn execute(games_dir: PathBuf, game_id: String) -> Result<(), CliError> {
    let store = GameStore::new(games_dir);
    let mut state = store.load(&game_id)?;

    let lines = read_player_lines(state.num_players)?;
    state.submit_declarations(&lines)?;
    store.save(&state)?;

    println!(
        "Recorded declarations for round {}; now {}",
        state.current_round,
        state.phase()?
    );
    Ok(())
}

//! Orders command implementation.

use std::path::PathBuf;

use super::{read_player_lines, CliError};
use gridwar::render::render_state;
use gridwar::store::GameStore;
use gridwar::{OrderPolicy, Verdict};

/// Execute the orders command: read one orders line per player from
/// stdin, resolve the round, and persist the result.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded, validation fails
/// under the reject policy, the round is in the wrong phase, or saving
/// fails.
pub(crate) fn execute(
    games_dir: PathBuf,
    game_id: String,
    forfeit_invalid: bool,
) -> Result<(), CliError> {
    let store = GameStore::new(games_dir);
    let mut state = store.load(&game_id)?;

    let lines = read_player_lines(state.num_players)?;
    let policy = if forfeit_invalid {
        OrderPolicy::Forfeit
    } else {
        OrderPolicy::Reject
    };
    state.submit_orders(&lines, policy)?;
    let verdict = state.resolve()?;
    store.save(&state)?;

    print!("{}", render_state(&state, true));
    if verdict == Verdict::Ongoing {
        println!("Round resolved; round {} begins", state.current_round);
    } else {
        println!("Game over: {verdict}");
    }
    Ok(())
}

//! Advance command implementation: auto-detect the current phase and
//! dispatch the lines on stdin accordingly.

use std::path::PathBuf;

use super::{declare, orders, CliError};
use gridwar::render::render_state;
use gridwar::store::GameStore;
use gridwar::RoundPhase;

/// Execute the advance command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded, is already finished,
/// or the dispatched transition fails.
pub(crate) fn execute(
    games_dir: PathBuf,
    game_id: String,
    forfeit_invalid: bool,
) -> Result<(), CliError> {
    let store = GameStore::new(games_dir.clone());
    let mut state = store.load(&game_id)?;

    match state.phase()? {
        RoundPhase::Declaring { .. } => declare::execute(games_dir, game_id),
        RoundPhase::AwaitingOrders => orders::execute(games_dir, game_id, forfeit_invalid),
        RoundPhase::ReadyToResolve => {
            // Orders are already stored; finish the round without
            // consuming stdin.
            let verdict = state.resolve()?;
            store.save(&state)?;
            print!("{}", render_state(&state, true));
            println!("Round resolved: {verdict}");
            Ok(())
        }
        RoundPhase::Terminal => Err(CliError::new(format!(
            "game '{game_id}' is finished: {}",
            state.verdict
        ))),
    }
}

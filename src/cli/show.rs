//! Show command implementation.

use std::path::PathBuf;

use super::output::JsonGameSnapshot;
use super::{CliError, OutputFormat};
use gridwar::render::render_state;
use gridwar::store::GameStore;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded.
pub(crate) fn execute(
    games_dir: PathBuf,
    game_id: String,
    format: OutputFormat,
) -> Result<(), CliError> {
    let store = GameStore::new(games_dir);
    let state = store.load(&game_id)?;

    match format {
        OutputFormat::Text => print!("{}", render_state(&state, true)),
        OutputFormat::Plain => print!("{}", render_state(&state, false)),
        OutputFormat::Json => {
            let snapshot = JsonGameSnapshot::from_state(&state);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

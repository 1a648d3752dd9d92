//! Replay command implementation.
//!
//! Every round record stores its pre-resolution board, so auditing a
//! match is a straight walk over the history — no re-simulation needed.

use std::path::PathBuf;

use super::{CliError, OutputFormat};
use gridwar::game::{player_marker, PlayerId, RoundRecord};
use gridwar::render::render_board;
use gridwar::store::GameStore;
use gridwar::GameState;

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded or the requested round
/// does not exist.
pub(crate) fn execute(
    games_dir: PathBuf,
    game_id: String,
    round: Option<u32>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let store = GameStore::new(games_dir);
    let state = store.load(&game_id)?;

    match round {
        Some(number) => {
            let record = state
                .rounds
                .iter()
                .find(|r| r.round_number == number)
                .ok_or_else(|| {
                    CliError::new(format!(
                        "game '{game_id}' has no round {number} (history holds {})",
                        state.rounds.len()
                    ))
                })?;
            print_round(&state, record, format)?;
        }
        None => {
            for record in &state.rounds {
                print_round(&state, record, format)?;
                println!();
            }
        }
    }

    if state.is_finished() {
        println!("Final verdict: {}", state.verdict);
    }
    Ok(())
}

/// Print one round of the history.
fn print_round(
    state: &GameState,
    record: &RoundRecord,
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let color = format == OutputFormat::Text;
    println!("=== Round {} ===", record.round_number);
    print!("{}", render_board(&record.board, color));

    for (idx, declaration) in record.declarations.iter().enumerate() {
        let marker = declaration_marker(idx, state.num_players);
        if !declaration.is_empty() {
            println!("  {marker} declared: {declaration}");
        }
    }

    match &record.orders {
        None => println!("  (orders not yet submitted)"),
        Some(orders) => {
            for (player, player_orders) in orders.iter().enumerate() {
                let marker = player_marker(player as PlayerId).unwrap_or('?');
                if player_orders.is_empty() {
                    println!("  {marker}: no orders");
                } else {
                    let rendered: Vec<String> = player_orders
                        .iter()
                        .map(|o| {
                            format!("{},{},{},{}", o.from.x, o.from.y, o.direction, o.units)
                        })
                        .collect();
                    println!("  {marker}: {}", rendered.join(" | "));
                }
            }
        }
    }
    Ok(())
}

/// Marker for the player who made declaration `idx` of a round.
fn declaration_marker(idx: usize, num_players: u8) -> char {
    if num_players == 0 {
        return '?';
    }
    player_marker((idx % usize::from(num_players)) as PlayerId).unwrap_or('?')
}

//! ASCII renderer for terminal viewing with ANSI colors.

use crate::game::{player_marker, Board, GameState, PlayerId, RoundRecord};

/// ANSI color codes cycled across players.
const PLAYER_COLORS: [&str; 8] = [
    "\x1b[31m", // Red
    "\x1b[34m", // Blue
    "\x1b[32m", // Green
    "\x1b[33m", // Yellow
    "\x1b[35m", // Magenta
    "\x1b[36m", // Cyan
    "\x1b[91m", // Bright Red
    "\x1b[94m", // Bright Blue
];

const RESET: &str = "\x1b[0m";
const GRAY: &str = "\x1b[90m";

/// Get the ANSI color for a player.
fn player_color(player: PlayerId) -> &'static str {
    PLAYER_COLORS[usize::from(player) % PLAYER_COLORS.len()]
}

/// Render a full game snapshot: header, board, per-player totals, and
/// the verdict or phase line.
#[must_use]
pub fn render_state(state: &GameState, color: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Game '{}'  round {}/{}  players {}\n\n",
        state.game_id, state.current_round, state.config.max_rounds, state.num_players
    ));

    if let Ok(round) = state.latest_round() {
        output.push_str(&render_board(&round.board, color));
        output.push('\n');
        render_declarations(&mut output, round, state.num_players);
    }

    render_totals(&mut output, state, color);

    if state.is_finished() {
        output.push_str(&format!("\nResult: {}\n", state.verdict));
    } else if let Ok(phase) = state.phase() {
        output.push_str(&format!("\nPhase: {phase}\n"));
    }

    output
}

/// Render one board as a bordered grid of `NNps` tokens.
#[must_use]
pub fn render_board(board: &Board, color: bool) -> String {
    let size = usize::from(board.size());
    let mut output = String::new();

    // Column header
    output.push_str("     ");
    for x in 0..size {
        output.push_str(&format!("{x:^5}"));
    }
    output.push('\n');

    let border = format!("   ┌{}┐\n", "─".repeat(size * 5));
    output.push_str(&border);

    let mut row_cells: Vec<String> = Vec::with_capacity(size);
    for (coord, square) in board.iter() {
        let marker = square.owner.and_then(player_marker).unwrap_or('.');
        let kind = if square.is_resource { '+' } else { '.' };
        let token = format!("{:02}{marker}{kind}", square.units);

        let cell = if !color {
            token
        } else if let Some(owner) = square.owner {
            format!("{}{token}{RESET}", player_color(owner))
        } else {
            format!("{GRAY}{token}{RESET}")
        };
        row_cells.push(cell);

        if row_cells.len() == size {
            output.push_str(&format!("{:>2} │ {} │\n", coord.y, row_cells.join(" ")));
            row_cells = Vec::with_capacity(size);
        }
    }

    output.push_str(&format!("   └{}┘\n", "─".repeat(size * 5)));
    output
}

/// Render this round's declarations, if any were made.
fn render_declarations(output: &mut String, round: &RoundRecord, num_players: u8) {
    if round.declarations.is_empty() || num_players == 0 {
        return;
    }
    output.push_str("Declarations:\n");
    for (idx, declaration) in round.declarations.iter().enumerate() {
        let marker = player_marker((idx % usize::from(num_players)) as PlayerId).unwrap_or('?');
        if declaration.is_empty() {
            output.push_str(&format!("  {marker}: (silent)\n"));
        } else {
            output.push_str(&format!("  {marker}: {declaration}\n"));
        }
    }
    output.push('\n');
}

/// Render per-player unit totals.
fn render_totals(output: &mut String, state: &GameState, color: bool) {
    let Ok(totals) = state.unit_totals() else {
        return;
    };
    output.push_str("Totals:");
    for (player, total) in totals.iter().enumerate() {
        let marker = player_marker(player as PlayerId).unwrap_or('?');
        if color {
            output.push_str(&format!(
                "  {}{marker}: {total}{RESET}",
                player_color(player as PlayerId)
            ));
        } else {
            output.push_str(&format!("  {marker}: {total}"));
        }
    }
    output.push('\n');
}

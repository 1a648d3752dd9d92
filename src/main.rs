//! Gridwar CLI - command-line interface for running territorial
//! strategy matches.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Gridwar - a deterministic territorial strategy engine
#[derive(Parser, Debug)]
#[command(name = "gridwar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding persisted games
    #[arg(long, global = true, default_value = "games")]
    games_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new game with randomized starting positions
    Init {
        /// Identifier for the new game
        game_id: String,

        /// Number of players (3-20)
        num_players: u8,

        /// Random seed for setup (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Board dimension override
        #[arg(long)]
        map_size: Option<u16>,

        /// Round limit override
        #[arg(long)]
        max_rounds: Option<u32>,

        /// Starting units override
        #[arg(long)]
        starting_units: Option<u32>,
    },

    /// Show the current state of a game
    Show {
        /// Game identifier
        game_id: String,

        /// Output format: text, plain, or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Record one declaration phase (one line per player on stdin)
    Declare {
        /// Game identifier
        game_id: String,
    },

    /// Submit orders (one line per player on stdin) and resolve the round
    Orders {
        /// Game identifier
        game_id: String,

        /// Treat a player's invalid orders line as "no orders" instead
        /// of rejecting the submission
        #[arg(long)]
        forfeit_invalid: bool,
    },

    /// Auto-detect the current phase and dispatch the lines on stdin
    Advance {
        /// Game identifier
        game_id: String,

        /// Treat a player's invalid orders line as "no orders" instead
        /// of rejecting the submission
        #[arg(long)]
        forfeit_invalid: bool,
    },

    /// Walk the stored round history of a game
    Replay {
        /// Game identifier
        game_id: String,

        /// Show a single round instead of the whole history
        #[arg(short, long)]
        round: Option<u32>,

        /// Output format: text, plain, or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let games_dir = args.games_dir;

    let result = match args.command {
        Commands::Init {
            game_id,
            num_players,
            seed,
            map_size,
            max_rounds,
            starting_units,
        } => cli::init::execute(
            games_dir,
            game_id,
            num_players,
            seed,
            map_size,
            max_rounds,
            starting_units,
        ),

        Commands::Show { game_id, format } => cli::show::execute(games_dir, game_id, format),

        Commands::Declare { game_id } => cli::declare::execute(games_dir, game_id),

        Commands::Orders {
            game_id,
            forfeit_invalid,
        } => cli::orders::execute(games_dir, game_id, forfeit_invalid),

        Commands::Advance {
            game_id,
            forfeit_invalid,
        } => cli::advance::execute(games_dir, game_id, forfeit_invalid),

        Commands::Replay {
            game_id,
            round,
            format,
        } => cli::replay::execute(games_dir, game_id, round, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

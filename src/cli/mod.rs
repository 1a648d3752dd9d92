//! CLI command implementations for gridwar.

pub(crate) mod advance;
pub(crate) mod declare;
pub(crate) mod init;
pub(crate) mod orders;
pub(crate) mod replay;
pub(crate) mod show;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};

use gridwar::EngineError;

/// Output format for the `show` and `replay` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text with ANSI colors.
    Text,
    /// Human-readable text without colors, for piping.
    Plain,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Read one line per player from standard input.
///
/// An agent that fails or times out is represented by its host as a
/// missing line; short input is padded with empty lines, which the
/// engine treats as "no orders" / an empty declaration.
pub(crate) fn read_player_lines(num_players: u8) -> Result<Vec<String>, CliError> {
    let stdin = io::stdin();
    let mut lines = Vec::with_capacity(usize::from(num_players));
    for line in stdin.lock().lines() {
        lines.push(line?);
        if lines.len() == usize::from(num_players) {
            break;
        }
    }
    lines.resize(usize::from(num_players), String::new());
    Ok(lines)
}

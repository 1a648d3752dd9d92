//! Error types for the game engine.

use std::fmt;

/// Errors exposed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A configuration value is outside its allowed range.
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: String,
    },
    /// A game with this identifier already exists in the store.
    GameAlreadyExists {
        /// The offending game identifier.
        game_id: String,
    },
    /// No game with this identifier exists in the store.
    GameNotFound {
        /// The requested game identifier.
        game_id: String,
    },
    /// A board blob could not be parsed.
    InvalidGridFormat {
        /// Location and description of the first offending token.
        detail: String,
    },
    /// A single order token could not be structurally parsed.
    ParseError {
        /// The offending token, verbatim.
        token: String,
        /// Why it failed.
        reason: String,
    },
    /// An order was well-formed but illegal against the current board.
    ValidationError {
        /// Human-readable description including coordinates and counts.
        detail: String,
    },
    /// An operation was attempted in the wrong round phase.
    PhaseError {
        /// The rejected operation and the phase it collided with.
        detail: String,
    },
    /// Storage or I/O failure in the host shell.
    Io {
        /// Description of the underlying failure.
        detail: String,
    },
    /// Internal invariant violation. Not recoverable.
    Bug {
        /// Description of the violated invariant.
        detail: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidConfig { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            EngineError::GameAlreadyExists { game_id } => {
                write!(f, "game '{game_id}' already exists")
            }
            EngineError::GameNotFound { game_id } => {
                write!(f, "game '{game_id}' not found")
            }
            EngineError::InvalidGridFormat { detail } => {
                write!(f, "invalid grid format: {detail}")
            }
            EngineError::ParseError { token, reason } => {
                write!(f, "cannot parse order '{token}': {reason}")
            }
            EngineError::ValidationError { detail } => {
                write!(f, "invalid order: {detail}")
            }
            EngineError::PhaseError { detail } => {
                write!(f, "wrong phase: {detail}")
            }
            EngineError::Io { detail } => {
                write!(f, "storage error: {detail}")
            }
            EngineError::Bug { detail } => {
                write!(f, "internal invariant violation: {detail}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = EngineError::GameNotFound {
            game_id: "match-7".to_string(),
        };
        assert!(format!("{err}").contains("match-7"));

        let err = EngineError::ParseError {
            token: "0,0,Q,5".to_string(),
            reason: "unknown direction 'Q'".to_string(),
        };
        let text = format!("{err}");
        assert!(text.contains("0,0,Q,5"));
        assert!(text.contains("unknown direction"));
    }
}

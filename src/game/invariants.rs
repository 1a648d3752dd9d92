//! Engine invariants - sanity checks that detect bugs.
//!
//! A correctly implemented game can never trip these. They are bug
//! detectors, not gameplay limits.

use crate::game::codec::MAX_ENCODABLE_UNITS;
use crate::game::GameState;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns the violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if state.rounds.is_empty() {
        violations.push(InvariantViolation::new(
            "round history is empty".to_string(),
        ));
        return violations;
    }

    if state.current_round != state.rounds.len() as u32 {
        violations.push(InvariantViolation::new(format!(
            "current_round {} disagrees with {} stored rounds",
            state.current_round,
            state.rounds.len()
        )));
    }

    let max_declarations =
        usize::from(state.num_players) * usize::from(state.config.declaration_count);

    for (idx, round) in state.rounds.iter().enumerate() {
        let expected = idx as u32 + 1;
        if round.round_number != expected {
            violations.push(InvariantViolation::new(format!(
                "round at index {idx} is numbered {}, expected {expected}",
                round.round_number
            )));
        }

        if round.board.size() != state.config.map_size {
            violations.push(InvariantViolation::new(format!(
                "round {} board has dimension {}, config says {}",
                round.round_number,
                round.board.size(),
                state.config.map_size
            )));
        }

        if round.declarations.len() > max_declarations {
            violations.push(InvariantViolation::new(format!(
                "round {} has {} declarations, at most {max_declarations} possible",
                round.round_number,
                round.declarations.len()
            )));
        }

        if let Some(orders) = &round.orders {
            if orders.len() != usize::from(state.num_players) {
                violations.push(InvariantViolation::new(format!(
                    "round {} stores orders for {} players, expected {}",
                    round.round_number,
                    orders.len(),
                    state.num_players
                )));
            }
        }

        for (coord, square) in round.board.iter() {
            if (square.units == 0) != square.owner.is_none() {
                violations.push(InvariantViolation::new(format!(
                    "round {} square {coord} breaks units-zero ⇔ neutral: {} units, owner {:?}",
                    round.round_number, square.units, square.owner
                )));
            }
            if square.units > MAX_ENCODABLE_UNITS {
                violations.push(InvariantViolation::new(format!(
                    "round {} square {coord} holds {} units, above the encodable maximum {MAX_ENCODABLE_UNITS}",
                    round.round_number, square.units
                )));
            }
            if let Some(owner) = square.owner {
                if owner >= state.num_players {
                    violations.push(InvariantViolation::new(format!(
                        "round {} square {coord} owned by ordinal {owner}, only {} players exist",
                        round.round_number, state.num_players
                    )));
                }
            }
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{initialize, Coord, GameConfig, OrderPolicy, Square};

    fn valid_game() -> GameState {
        initialize("g", 3, GameConfig::default(), 17).unwrap()
    }

    #[test]
    fn test_fresh_game_passes() {
        let state = valid_game();
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_resolved_rounds_pass() {
        let mut state = valid_game();
        for _ in 0..3 {
            state.submit_declarations(&vec![String::new(); 3]).unwrap();
            state
                .submit_orders(&vec![String::new(); 3], OrderPolicy::Reject)
                .unwrap();
            state.resolve().unwrap();
        }
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_round_counter_drift_detected() {
        let mut state = valid_game();
        state.current_round = 5;
        let violations = check_invariants(&state);
        assert!(!violations.is_empty());
        assert!(violations[0].message.contains("current_round"));
    }

    #[test]
    fn test_neutral_with_units_detected() {
        let mut state = valid_game();
        let board = &mut state.rounds[0].board;
        let coord = Coord::new(2, 2);
        // Bypass Square::occupy to plant the inconsistency.
        board.get_mut(coord).unwrap().units = 3;

        let violations = check_invariants(&state);
        assert!(violations.iter().any(|v| v.message.contains("units-zero")));
    }

    #[test]
    fn test_unencodable_units_detected() {
        let mut state = valid_game();
        state.rounds[0]
            .board
            .set(Coord::new(2, 2), Square::held(0, MAX_ENCODABLE_UNITS + 1));

        let violations = check_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| v.message.contains("encodable maximum")));
    }

    #[test]
    fn test_foreign_owner_detected() {
        let mut state = valid_game();
        state.rounds[0]
            .board
            .set(Coord::new(2, 2), Square::held(7, 4));

        let violations = check_invariants(&state);
        assert!(violations.iter().any(|v| v.message.contains("ordinal 7")));
    }

    #[test]
    fn test_assert_invariants_passes_valid() {
        assert_invariants(&valid_game());
    }
}

//! Combat resolution.
//!
//! Resolution happens in two globally ordered steps. First every source
//! square is debited by the total units leaving it; a drained square
//! goes neutral. Then each destination is awarded independently from a
//! "forces" snapshot: the post-debit incumbent plus every arriving
//! stack, summed per owner. Modeling the incumbent garrison as just
//! another force entry lets defense fall out of the same tie-break rule
//! as attack, and a swap (A→B while B→A, both drained) works because
//! the debit step neutralizes both squares before forces are counted.

use std::collections::{BTreeMap, HashMap};

use crate::error::{EngineError, EngineResult};
use crate::game::{Board, Coord, Movement, PlayerId};

/// Debit every source square by the units leaving it.
///
/// Applied once, globally, before any destination arithmetic. Squares
/// drained to zero go neutral.
///
/// # Errors
///
/// Returns `Bug` if a debit would drive a square negative or pull units
/// from a square the mover does not hold — the validator makes both
/// impossible.
pub fn apply_source_debits(board: &mut Board, movements: &[Movement]) -> EngineResult<()> {
    let mut leaving: HashMap<Coord, u32> = HashMap::new();
    for movement in movements {
        *leaving.entry(movement.from).or_insert(0) += movement.units;
    }

    for (coord, units) in leaving {
        let square = board.get_mut(coord).ok_or_else(|| EngineError::Bug {
            detail: format!("movement sourced from off-board square {coord}"),
        })?;
        if units > square.units {
            return Err(EngineError::Bug {
                detail: format!(
                    "debit of {units} units from {coord} exceeds its garrison of {}",
                    square.units
                ),
            });
        }
        square.units -= units;
        if square.units == 0 {
            square.clear();
        }
    }

    Ok(())
}

/// Resolve combat at every destination square.
///
/// Must be called on the post-debit board. Each contested square is
/// awarded from the same snapshot, so the order in which squares are
/// visited cannot change the outcome:
///
/// - no forces: the square goes neutral;
/// - one force: that owner holds the square with their full stack;
/// - several forces: the largest stack wins with `largest − second`
///   units; a tie for first destroys every stack at the square,
///   runner-ups included.
pub fn resolve_combat(board: &mut Board, movements: &[Movement]) {
    // Arrivals per destination, summed per owner. BTreeMap keeps the
    // per-square force list in a stable order.
    let mut arrivals: HashMap<Coord, BTreeMap<PlayerId, u32>> = HashMap::new();
    for movement in movements {
        *arrivals
            .entry(movement.to)
            .or_default()
            .entry(movement.owner)
            .or_insert(0) += movement.units;
    }

    for (coord, incoming) in arrivals {
        let Some(square) = board.get_mut(coord) else {
            continue;
        };

        let mut forces = incoming;
        if let Some(incumbent) = square.owner {
            *forces.entry(incumbent).or_insert(0) += square.units;
        }

        match award(&forces) {
            Some((winner, remaining)) => square.occupy(winner, remaining),
            None => square.clear(),
        }
    }
}

/// Pick the holder of a square from its forces.
///
/// Returns `None` when the square ends neutral (no forces, or a tie for
/// first place).
fn award(forces: &BTreeMap<PlayerId, u32>) -> Option<(PlayerId, u32)> {
    let mut ranked: Vec<(PlayerId, u32)> = forces.iter().map(|(&p, &u)| (p, u)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    match ranked.as_slice() {
        [] => None,
        [(owner, units)] => Some((*owner, *units)),
        [(first, u1), (_, u2), ..] => {
            if u1 > u2 {
                Some((*first, u1 - u2))
            } else {
                None
            }
        }
    }
}

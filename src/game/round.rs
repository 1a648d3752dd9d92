//! Round records and the round driver.
//!
//! A round moves through declaration phases, then order submission,
//! then resolution. Resolution either appends a fresh round (verdict
//! ongoing) or freezes the game (verdict terminal). All transitions
//! live here; [`GameState`](crate::game::GameState) holds the data.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::game::{
    apply_production, apply_source_debits, evaluate_verdict, parse_orders, resolve_combat,
    to_movements, Board, GameState, Order, PlayerId, Verdict,
};

/// One entry in the append-only round history.
///
/// The stored board is the state at the start of the round, before its
/// orders execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round_number: u32,
    /// Declarations in submission order: one string per player per
    /// completed declaration phase.
    pub declarations: Vec<String>,
    /// Validated orders indexed by player ordinal. `None` until the
    /// order phase completes; a player who passed holds an empty list.
    pub orders: Option<Vec<Vec<Order>>>,
    /// Board at the start of the round.
    pub board: Board,
}

impl RoundRecord {
    /// Create the record for a round that has seen no input yet.
    #[must_use]
    pub fn fresh(round_number: u32, board: Board) -> Self {
        Self {
            round_number,
            declarations: Vec::new(),
            orders: None,
            board,
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Collecting declarations; `completed` phases are done so far.
    Declaring {
        /// Completed declaration phases, `0..declaration_count`.
        completed: u8,
    },
    /// Declarations done; waiting for every player's orders line.
    AwaitingOrders,
    /// Orders stored; the round can resolve.
    ReadyToResolve,
    /// The verdict is terminal; no further transitions.
    Terminal,
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundPhase::Declaring { completed } => {
                write!(f, "declaration phase {}", completed + 1)
            }
            RoundPhase::AwaitingOrders => write!(f, "awaiting orders"),
            RoundPhase::ReadyToResolve => write!(f, "ready to resolve"),
            RoundPhase::Terminal => write!(f, "finished"),
        }
    }
}

/// What to do with a player whose orders line fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Reject the whole submission with the validation error.
    Reject,
    /// Treat the offending player as having submitted no orders.
    Forfeit,
}

impl GameState {
    /// Where the current round stands.
    ///
    /// # Errors
    ///
    /// Returns `Bug` if the round history is empty.
    pub fn phase(&self) -> EngineResult<RoundPhase> {
        if self.verdict.is_terminal() {
            return Ok(RoundPhase::Terminal);
        }
        let round = self.latest_round()?;
        let per_phase = usize::from(self.num_players);
        let required = per_phase * usize::from(self.config.declaration_count);

        if round.declarations.len() < required {
            return Ok(RoundPhase::Declaring {
                completed: (round.declarations.len() / per_phase) as u8,
            });
        }
        if round.orders.is_none() {
            return Ok(RoundPhase::AwaitingOrders);
        }
        Ok(RoundPhase::ReadyToResolve)
    }

    /// Record one declaration phase: one line per player, in player
    /// order.
    ///
    /// Each line is truncated to `max_plan_length` characters with
    /// internal newlines and tabs collapsed to spaces. Declarations have
    /// no mechanical effect; they are stored verbatim otherwise.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError` if the round is not in a declaration phase,
    /// or `ValidationError` if the line count is wrong.
    pub fn submit_declarations(&mut self, lines: &[String]) -> EngineResult<()> {
        let phase = self.phase()?;
        if !matches!(phase, RoundPhase::Declaring { .. }) {
            return Err(EngineError::PhaseError {
                detail: format!("declarations rejected: round is {phase}"),
            });
        }
        if lines.len() != usize::from(self.num_players) {
            return Err(EngineError::ValidationError {
                detail: format!(
                    "expected {} declaration lines, got {}",
                    self.num_players,
                    lines.len()
                ),
            });
        }

        let max_len = self.config.max_plan_length;
        let round = self.latest_round_mut()?;
        round
            .declarations
            .extend(lines.iter().map(|line| sanitize_declaration(line, max_len)));
        Ok(())
    }

    /// Validate and store every player's orders line for this round.
    ///
    /// Lines are indexed by player ordinal. An empty or whitespace line
    /// means "no orders". With [`OrderPolicy::Forfeit`], a line that
    /// fails validation is stored as "no orders" instead of rejecting
    /// the submission.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError` outside the order phase, `ValidationError`
    /// on a wrong line count, and — under [`OrderPolicy::Reject`] — the
    /// first order error encountered.
    pub fn submit_orders(&mut self, lines: &[String], policy: OrderPolicy) -> EngineResult<()> {
        let phase = self.phase()?;
        if phase != RoundPhase::AwaitingOrders {
            return Err(EngineError::PhaseError {
                detail: format!("orders rejected: round is {phase}"),
            });
        }
        if lines.len() != usize::from(self.num_players) {
            return Err(EngineError::ValidationError {
                detail: format!(
                    "expected {} order lines, got {}",
                    self.num_players,
                    lines.len()
                ),
            });
        }

        let config = self.config.clone();
        let round = self.latest_round_mut()?;
        let mut orders: Vec<Vec<Order>> = Vec::with_capacity(lines.len());
        for (player, line) in lines.iter().enumerate() {
            match parse_orders(line, player as PlayerId, &round.board, &config) {
                Ok(parsed) => orders.push(parsed),
                Err(err) => match policy {
                    OrderPolicy::Reject => return Err(err.into()),
                    OrderPolicy::Forfeit => orders.push(Vec::new()),
                },
            }
        }

        round.orders = Some(orders);
        Ok(())
    }

    /// Resolve the current round: debit sources, fight combats, grant
    /// production, evaluate the verdict.
    ///
    /// An ongoing verdict appends a fresh round whose board is the
    /// post-production board; a terminal verdict freezes the game with
    /// the history as it stands.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError` unless orders have been submitted, and `Bug`
    /// if resolution violates an internal invariant.
    pub fn resolve(&mut self) -> EngineResult<Verdict> {
        let phase = self.phase()?;
        if phase != RoundPhase::ReadyToResolve {
            return Err(EngineError::PhaseError {
                detail: format!("cannot resolve: round is {phase}"),
            });
        }

        let round = self.latest_round()?;
        let orders = round.orders.as_ref().ok_or_else(|| EngineError::Bug {
            detail: "round ready to resolve without orders".to_string(),
        })?;

        let mut board = round.board.clone();
        let movements = to_movements(orders, board.size())?;
        apply_source_debits(&mut board, &movements)?;
        resolve_combat(&mut board, &movements);
        apply_production(&mut board, &self.config);

        let verdict = evaluate_verdict(
            &board,
            self.num_players,
            self.current_round,
            self.config.max_rounds,
        );

        if verdict.is_terminal() {
            self.verdict = verdict.clone();
        } else {
            self.current_round += 1;
            let next = RoundRecord::fresh(self.current_round, board);
            self.rounds.push(next);
        }

        Ok(verdict)
    }
}

/// Collapse newlines and tabs to spaces and truncate to the configured
/// declaration length.
fn sanitize_declaration(line: &str, max_len: usize) -> String {
    line.chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .take(max_len)
        .collect()
}

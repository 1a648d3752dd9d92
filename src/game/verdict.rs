//! Terminal-condition oracle.

use serde::{Deserialize, Serialize};

use crate::game::{Board, PlayerId};

/// The outcome of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "players", rename_all = "snake_case")]
pub enum Verdict {
    /// The game continues.
    Ongoing,
    /// A single player won.
    Winner(PlayerId),
    /// Two or more players tied at the round limit.
    MultiWinner(Vec<PlayerId>),
    /// Every unit on the board was destroyed.
    Draw,
}

impl Verdict {
    /// Whether this verdict ends the game.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "ongoing"),
            Verdict::Winner(player) => {
                let marker = crate::game::player_marker(*player).unwrap_or('?');
                write!(f, "winner: player {marker}")
            }
            Verdict::MultiWinner(players) => {
                let markers: Vec<String> = players
                    .iter()
                    .map(|p| crate::game::player_marker(*p).unwrap_or('?').to_string())
                    .collect();
                write!(f, "shared win: players {}", markers.join(", "))
            }
            Verdict::Draw => write!(f, "draw: mutual annihilation"),
        }
    }
}

/// Evaluate the post-production board for a terminal condition.
///
/// Priority: annihilation, then domination, then timeout.
///
/// - **Annihilation**: zero units anywhere ⇒ [`Verdict::Draw`].
/// - **Domination**: a player holding strictly more than half of all
///   units wins outright. At most one player can qualify, and a sole
///   survivor always does.
/// - **Timeout**: at `max_rounds`, the players tied for the largest
///   total share the win.
#[must_use]
pub fn evaluate_verdict(board: &Board, num_players: u8, current_round: u32, max_rounds: u32) -> Verdict {
    let totals = board.unit_totals(num_players);
    let grand_total: u64 = totals.iter().sum();

    if grand_total == 0 {
        return Verdict::Draw;
    }

    for (player, &total) in totals.iter().enumerate() {
        if total * 2 > grand_total {
            return Verdict::Winner(player as PlayerId);
        }
    }

    if current_round >= max_rounds {
        let best = totals.iter().copied().max().unwrap_or(0);
        let leaders: Vec<PlayerId> = totals
            .iter()
            .enumerate()
            .filter(|(_, &total)| total == best)
            .map(|(player, _)| player as PlayerId)
            .collect();
        return match leaders.as_slice() {
            [single] => Verdict::Winner(*single),
            _ => Verdict::MultiWinner(leaders),
        };
    }

    Verdict::Ongoing
}

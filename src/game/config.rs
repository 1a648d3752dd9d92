//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::game::codec::MAX_ENCODABLE_UNITS;
use crate::game::MAX_PLAYERS;

/// Tunable rules for a game. Fixed at game creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimum number of players, checked at game init.
    pub min_players: u8,
    /// Maximum number of players, checked at game init.
    pub max_players: u8,
    /// Board dimension.
    pub map_size: u16,
    /// Round number at which the timeout verdict fires.
    pub max_rounds: u32,
    /// Units placed on each player's starting square.
    pub starting_units: u32,
    /// Declarations are truncated to this many characters.
    pub max_plan_length: usize,
    /// Declaration phases per round.
    pub declaration_count: u8,
    /// Upper bound on orders a player may submit per round.
    pub max_orders_per_round: usize,
    /// Percentage of non-starting squares marked as resource squares.
    pub resource_square_pct: u8,
    /// Units added per round to owned normal squares.
    pub base_production: u32,
    /// Units added per round to owned resource squares.
    pub resource_production: u32,
    /// Production is suppressed on squares at or above this unit count.
    pub production_cap: u32,
    /// Advisory round cadence for the host's scheduler. Nothing in the
    /// engine consumes this.
    pub round_duration_hours: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 20,
            map_size: 5,
            max_rounds: 15,
            starting_units: 5,
            max_plan_length: 500,
            declaration_count: 1,
            max_orders_per_round: 20,
            resource_square_pct: 10,
            base_production: 1,
            resource_production: 2,
            production_cap: 21,
            round_duration_hours: 24,
        }
    }
}

impl GameConfig {
    /// Check that every option is inside its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending option.
    pub fn validate(&self) -> EngineResult<()> {
        let fail = |reason: String| Err(EngineError::InvalidConfig { reason });

        if self.map_size < 2 {
            return fail(format!("map_size {} is below the minimum of 2", self.map_size));
        }
        if self.min_players < 3 {
            return fail(format!(
                "min_players {} is below the minimum of 3",
                self.min_players
            ));
        }
        if self.max_players > MAX_PLAYERS {
            return fail(format!(
                "max_players {} exceeds the supported maximum of {MAX_PLAYERS}",
                self.max_players
            ));
        }
        if self.min_players > self.max_players {
            return fail(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            ));
        }
        if self.declaration_count == 0 {
            return fail("declaration_count must be at least 1".to_string());
        }
        if self.max_rounds == 0 {
            return fail("max_rounds must be at least 1".to_string());
        }
        if self.resource_square_pct > 100 {
            return fail(format!(
                "resource_square_pct {} exceeds 100",
                self.resource_square_pct
            ));
        }
        if self.starting_units == 0 {
            return fail("starting_units must be positive".to_string());
        }
        if self.starting_units > MAX_ENCODABLE_UNITS {
            return fail(format!(
                "starting_units {} exceeds the encodable maximum {MAX_ENCODABLE_UNITS}",
                self.starting_units
            ));
        }
        // Production is granted below the cap, so a square can finish a
        // round at cap - 1 + production; that value must stay encodable.
        let peak = self
            .production_cap
            .saturating_sub(1)
            .saturating_add(self.base_production.max(self.resource_production));
        if peak > MAX_ENCODABLE_UNITS {
            return fail(format!(
                "production_cap {} with production {} can exceed the encodable maximum {MAX_ENCODABLE_UNITS}",
                self.production_cap,
                self.base_production.max(self.resource_production)
            ));
        }

        Ok(())
    }

    /// Number of resource squares to place at setup:
    /// `ceil(map_size² × resource_square_pct / 100)`.
    #[must_use]
    pub fn resource_square_count(&self) -> usize {
        let cells = u64::from(self.map_size) * u64::from(self.map_size);
        let numerator = cells * u64::from(self.resource_square_pct);
        (numerator.div_ceil(100)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_map() {
        let config = GameConfig {
            map_size: 1,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("map_size"));
    }

    #[test]
    fn test_rejects_player_bounds() {
        let config = GameConfig {
            max_players: 21,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            min_players: 10,
            max_players: 5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unencodable_production_peak() {
        let config = GameConfig {
            production_cap: 99,
            resource_production: 2,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("production_cap"));
    }

    #[test]
    fn test_resource_square_count_ceiling() {
        let config = GameConfig {
            map_size: 5,
            resource_square_pct: 10,
            ..GameConfig::default()
        };
        // ceil(25 * 10 / 100) = ceil(2.5) = 3
        assert_eq!(config.resource_square_count(), 3);

        let config = GameConfig {
            map_size: 10,
            resource_square_pct: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.resource_square_count(), 0);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

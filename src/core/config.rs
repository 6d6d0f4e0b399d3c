//! Simulation configuration
//!
//! Values a run can tune without changing the game's rule table. The rule
//! table itself (unit power bonus, combat dice, collection yields, building
//! costs) lives on the entity types.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Configuration for a single simulation run
///
/// Loaded from TOML; every field is optional in the file and falls back to
/// the default below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === RANDOMNESS ===
    /// Seed for the run's dice
    ///
    /// `None` draws a seed from entropy once when the run starts. The chosen
    /// seed is logged so the run can be replayed.
    pub seed: Option<u64>,

    // === FACTIONS ===
    /// Resources a faction holds when it is first positioned
    pub starting_resources: i32,

    /// Power a faction holds when it is first positioned
    pub starting_power: i32,

    // === ACTIONS ===
    /// Exclusive upper bound of the resources an attack can steal
    ///
    /// An attack rolls uniformly in `[0, attack_loot_ceiling)`.
    pub attack_loot_ceiling: i32,

    // === TRANSCRIPT ===
    /// Emit a rendered board after placement, movement, combat and construction
    pub board_snapshots: bool,

    /// Largest nominal board, in cells, that snapshots will render
    pub snapshot_cell_limit: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_resources: 100,
            starting_power: 100,
            attack_loot_ceiling: 50,
            board_snapshots: true,
            snapshot_cell_limit: 10_000,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Return a copy with the seed fixed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.attack_loot_ceiling <= 0 {
            return Err(SimError::InvalidConfig(format!(
                "attack_loot_ceiling ({}) must be positive",
                self.attack_loot_ceiling
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_resources, 100);
        assert_eq!(config.starting_power, 100);
        assert_eq!(config.attack_loot_ceiling, 50);
        assert!(config.seed.is_none());
        assert_eq!(config.snapshot_cell_limit, 10_000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = "seed = 7\nboard_snapshots = false\n";
        let config = SimulationConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(!config.board_snapshots);
        assert_eq!(config.starting_power, 100);
    }

    #[test]
    fn test_rejects_non_positive_loot_ceiling() {
        let result = SimulationConfig::from_toml_str("attack_loot_ceiling = 0");
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = SimulationConfig::from_toml_str("seed = \"not a number\"");
        assert!(matches!(result, Err(SimError::ConfigError(_))));
    }

    #[test]
    fn test_with_seed() {
        let config = SimulationConfig::new().with_seed(99);
        assert_eq!(config.seed, Some(99));
    }
}

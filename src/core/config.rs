//! Engine tuning: costs, event odds and grant policy.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::event::GameEvent;
use crate::schema::vitals::Vitals;

/// Reasons a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("event chance {0} is above 100 percent")]
    InvalidChance(u32),
}

/// Numbers the engine plays by. Every field has a default, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub starting_vitals: Vitals,
    /// Energy spent when choice A moves the wolf.
    pub choice_a_energy_cost: i32,
    /// Energy spent when choice B moves the wolf.
    pub choice_b_energy_cost: i32,
    /// Hunger added by every choice, moved or not.
    pub hunger_per_choice: i32,
    /// Percent chance that a choice stirs up `random_event`.
    pub event_chance: u32,
    pub random_event: GameEvent,
    /// Hand out a node's items again each time the wolf stands there.
    pub regrant_on_revisit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_vitals: Vitals::default(),
            choice_a_energy_cost: 10,
            choice_b_energy_cost: 5,
            hunger_per_choice: 5,
            event_chance: 30,
            random_event: GameEvent::snowstorm(),
            regrant_on_revisit: true,
        }
    }
}

impl EngineConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<EngineConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_chance > 100 {
            return Err(ConfigError::InvalidChance(self.event_chance));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_event_chance(mut self, chance: u32) -> Self {
        self.event_chance = chance;
        self
    }

    pub fn with_regrant_on_revisit(mut self, regrant: bool) -> Self {
        self.regrant_on_revisit = regrant;
        self
    }

    pub fn with_starting_vitals(mut self, vitals: Vitals) -> Self {
        self.starting_vitals = vitals;
        self
    }
}

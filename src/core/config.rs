//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

use crate::core::error::{MeadowError, Result};
use crate::core::types::Day;

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days during which new bees and plants are spawned
    ///
    /// Spawning, visitation, and day-advance all happen every seeding day,
    /// even on days when zero plants are in bloom.
    pub seeding_days: Day,

    /// Minimum entities of each family (bees, plants) spawned per seeding day
    pub min_daily_spawn: u32,

    /// Maximum entities of each family spawned per seeding day
    ///
    /// Each seeding day draws one count in [min_daily_spawn, max_daily_spawn]
    /// for bees and another for plants.
    pub max_daily_spawn: u32,

    /// Seed for the deterministic RNG owned by the driver
    pub seed: u64,

    /// Hard cap on extended-phase days
    ///
    /// Termination is guaranteed by the bounded day counters; the cap only
    /// exists so a logic regression fails loudly instead of looping forever.
    /// It never binds with the shipped preference rules.
    pub max_extended_days: Day,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seeding_days: 7,
            min_daily_spawn: 1,
            max_daily_spawn: 3,
            seed: 12345,
            max_extended_days: 10_000,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.seeding_days == 0 {
            return Err(MeadowError::InvalidConfig(
                "seeding_days must be at least 1".into(),
            ));
        }

        if self.min_daily_spawn == 0 {
            return Err(MeadowError::InvalidConfig(
                "min_daily_spawn must be positive".into(),
            ));
        }

        if self.min_daily_spawn > self.max_daily_spawn {
            return Err(MeadowError::InvalidConfig(format!(
                "min_daily_spawn ({}) must be <= max_daily_spawn ({})",
                self.min_daily_spawn, self.max_daily_spawn
            )));
        }

        if self.max_extended_days == 0 {
            return Err(MeadowError::InvalidConfig(
                "max_extended_days must be positive".into(),
            ));
        }

        Ok(())
    }
}

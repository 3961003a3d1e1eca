// src/simulation/config.rs

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SEED: u64 = 42;

/// Input parameters for one run. Field names follow the camelCase keys the
/// front-end sends, so a config document can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub fab_capacity: u32, // Units the fab accepts per order
    pub initial_inventory: u32,
    pub min_demand: u32,
    pub max_demand: u32,
    pub reorder_level: u32,
    pub reorder_quantity: u32,
    pub lead_time_fab: usize, // Days
    pub lead_time_assembly: usize,
    pub lead_time_transport: usize,
    pub disruption_prob: f64, // Per-day trigger probability
    pub simulation_duration: usize,

    pub seed: u64,
    pub holding_cost: f64,   // Per unit per day
    pub backorder_cost: f64, // Per unit per day
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fab_capacity: 1000,
            initial_inventory: 5000,
            min_demand: 150,
            max_demand: 300,
            reorder_level: 2000,
            reorder_quantity: 3000,
            lead_time_fab: 10,
            lead_time_assembly: 5,
            lead_time_transport: 3,
            disruption_prob: 0.005,
            simulation_duration: 180,
            seed: DEFAULT_SEED,
            holding_cost: 1.0,
            backorder_cost: 10.0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Checks every invariant a run depends on. Unsigned fields are
    /// non-negative by construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_demand > self.max_demand {
            return Err(ConfigError::DemandRange {
                min: self.min_demand,
                max: self.max_demand,
            });
        }
        if self.simulation_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !(0.0..=1.0).contains(&self.disruption_prob) {
            // NaN also lands here
            return Err(ConfigError::ProbabilityOutOfRange(self.disruption_prob));
        }
        check_cost("holdingCost", self.holding_cost)?;
        check_cost("backorderCost", self.backorder_cost)?;
        Ok(())
    }

    /// Midpoint of the demand range, the anchor of the seasonal signal.
    pub fn base_demand(&self) -> f64 {
        (self.min_demand as f64 + self.max_demand as f64) / 2.0
    }
}

fn check_cost(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCost { name, value })
    }
}

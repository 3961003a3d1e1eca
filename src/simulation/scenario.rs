// src/simulation/scenario.rs

use crate::error::ConfigError;
use crate::io::demand::generate_seasonal_demand;
use crate::io::events::generate_disruption_events;
use crate::simulation::config::SimulationConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Offset separating the demand-noise stream from the event stream.
const DEMAND_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// The stochastic environment of a run: one entry per day for both the
/// disruption triggers and the customer demand. Policies compared against
/// each other replay the same scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    disruption_events: Vec<bool>,
    demand: Vec<u32>,
}

impl Scenario {
    /// Draws a scenario from the config seed.
    pub fn generate(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let days = config.simulation_duration;

        let mut event_rng = StdRng::seed_from_u64(config.seed);
        let disruption_events =
            generate_disruption_events(days, config.disruption_prob, &mut event_rng)?;

        let mut demand_rng = StdRng::seed_from_u64(config.seed.wrapping_add(DEMAND_STREAM));
        let demand = generate_seasonal_demand(days, config.base_demand(), &mut demand_rng);

        Ok(Self {
            disruption_events,
            demand,
        })
    }

    /// Builds a scenario from explicit series. Both must be the same length.
    pub fn from_parts(
        disruption_events: Vec<bool>,
        demand: Vec<u32>,
    ) -> Result<Self, ConfigError> {
        if disruption_events.len() != demand.len() {
            return Err(ConfigError::SeriesMismatch {
                events: disruption_events.len(),
                demand: demand.len(),
            });
        }
        Ok(Self {
            disruption_events,
            demand,
        })
    }

    pub fn days(&self) -> usize {
        self.demand.len()
    }

    /// Demand for a 1-based day.
    pub fn demand_on(&self, day: usize) -> u32 {
        self.demand.get(day.wrapping_sub(1)).copied().unwrap_or(0)
    }

    /// Whether a disruption triggers on a 1-based day.
    pub fn disruption_on(&self, day: usize) -> bool {
        self.disruption_events
            .get(day.wrapping_sub(1))
            .copied()
            .unwrap_or(false)
    }

    /// Triggers for the days strictly after `day`, nearest first.
    pub fn events_after(&self, day: usize) -> &[bool] {
        let start = day.min(self.disruption_events.len());
        &self.disruption_events[start..]
    }

    pub fn disruption_events(&self) -> &[bool] {
        &self.disruption_events
    }

    pub fn demand(&self) -> &[u32] {
        &self.demand
    }
}

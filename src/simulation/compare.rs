// src/simulation/compare.rs

use crate::error::ConfigError;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{run_with_scenario, SimulationResult};
use crate::simulation::scenario::Scenario;
use crate::strategy::implementations::PolicyKind;
use rayon::prelude::*;
use serde::Serialize;

/// Reactive and predictive runs over one shared scenario.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyComparison {
    pub seed: u64,
    pub reactive: SimulationResult,
    pub predictive: SimulationResult,
}

impl PolicyComparison {
    pub fn result(&self, policy: PolicyKind) -> &SimulationResult {
        match policy {
            PolicyKind::Reactive => &self.reactive,
            PolicyKind::Predictive => &self.predictive,
        }
    }

    /// Cost saved by the predictive policy; negative if it cost more.
    pub fn cost_savings(&self) -> f64 {
        self.reactive.kpis.total_cost - self.predictive.kpis.total_cost
    }

    /// Service level gained by the predictive policy, in points.
    pub fn service_level_gain(&self) -> f64 {
        self.predictive.kpis.service_level - self.reactive.kpis.service_level
    }
}

/// Runs both policies on the scenario drawn from `config.seed`.
///
/// The runs share nothing mutable, so they execute on separate workers.
pub fn compare(config: &SimulationConfig) -> Result<PolicyComparison, ConfigError> {
    let scenario = Scenario::generate(config)?;
    compare_on(config, &scenario)
}

/// Runs both policies on a given scenario.
pub fn compare_on(
    config: &SimulationConfig,
    scenario: &Scenario,
) -> Result<PolicyComparison, ConfigError> {
    let (reactive, predictive) = rayon::join(
        || run_with_scenario(config, PolicyKind::Reactive, scenario),
        || run_with_scenario(config, PolicyKind::Predictive, scenario),
    );
    Ok(PolicyComparison {
        seed: config.seed,
        reactive: reactive?,
        predictive: predictive?,
    })
}

/// Mean KPIs of one policy over a batch of seeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAverages {
    pub service_level: f64,
    pub total_cost: f64,
    pub resilience_score: f64,
    pub stockout_days: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub runs: usize,
    pub reactive: PolicyAverages,
    pub predictive: PolicyAverages,
    /// Seeds on which the predictive policy had the lower total cost.
    pub predictive_cheaper: usize,
}

/// Monte Carlo style evaluation: one paired comparison per seed.
pub fn compare_over_seeds(
    config: &SimulationConfig,
    seeds: &[u64],
) -> Result<Vec<PolicyComparison>, ConfigError> {
    config.validate()?;
    seeds
        .par_iter()
        .map(|&seed| {
            let seeded = SimulationConfig {
                seed,
                ..config.clone()
            };
            compare(&seeded)
        })
        .collect()
}

fn average(comparisons: &[PolicyComparison], policy: PolicyKind) -> PolicyAverages {
    if comparisons.is_empty() {
        return PolicyAverages::default();
    }
    let n = comparisons.len() as f64;
    let mut sums = PolicyAverages::default();
    for comparison in comparisons {
        let kpis = &comparison.result(policy).kpis;
        sums.service_level += kpis.service_level;
        sums.total_cost += kpis.total_cost;
        sums.resilience_score += kpis.resilience_score;
        sums.stockout_days += kpis.total_stockout_days as f64;
    }
    PolicyAverages {
        service_level: sums.service_level / n,
        total_cost: sums.total_cost / n,
        resilience_score: sums.resilience_score / n,
        stockout_days: sums.stockout_days / n,
    }
}

pub fn summarize_batch(comparisons: &[PolicyComparison]) -> BatchSummary {
    BatchSummary {
        runs: comparisons.len(),
        reactive: average(comparisons, PolicyKind::Reactive),
        predictive: average(comparisons, PolicyKind::Predictive),
        predictive_cheaper: comparisons.iter().filter(|c| c.cost_savings() > 0.0).count(),
    }
}

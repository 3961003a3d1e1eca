// src/simulation/kpi.rs

use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::DailyStat;
use crate::strategy::traits::OrderPolicy;
use serde::Serialize;

/// Summary metrics of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_cost: f64,
    pub holding_cost: f64,
    pub backorder_cost: f64,
    /// Reserved: needs per-unit tracking, always 0.
    pub average_delay: f64,
    pub service_level: f64, // % of days without backorders
    pub resilience_score: f64,
    pub total_stockout_days: usize,
    pub total_demand: u64,
    pub total_fulfilled: u64,
    pub fill_rate: f64, // % of demand shipped by the end of the horizon
    pub disruption_days: usize,
    pub bullwhip_ratio: f64,
}

/// Reduces the daily records of a run into its KPI summary.
pub fn summarize(
    stats: &[DailyStat],
    config: &SimulationConfig,
    policy: &dyn OrderPolicy,
) -> KpiSummary {
    let horizon = stats.len().max(1) as f64;

    let holding_cost: f64 = stats
        .iter()
        .map(|s| s.inventory_warehouse as f64 * config.holding_cost)
        .sum();
    let backorder_cost: f64 = stats
        .iter()
        .map(|s| s.backorders as f64 * config.backorder_cost)
        .sum();

    let total_stockout_days = stats.iter().filter(|s| s.backorders > 0).count();
    let disruption_days = stats.iter().filter(|s| s.disruption_active).count();
    let service_level = (1.0 - total_stockout_days as f64 / horizon) * 100.0;

    let total_demand: u64 = stats.iter().map(|s| u64::from(s.demand)).sum();
    let total_fulfilled: u64 = stats.iter().map(|s| s.sales).sum();
    let fill_rate = if total_demand == 0 {
        100.0
    } else {
        (total_fulfilled as f64 / total_demand as f64 * 100.0).min(100.0)
    };

    KpiSummary {
        total_cost: holding_cost + backorder_cost,
        holding_cost,
        backorder_cost,
        average_delay: 0.0,
        service_level,
        resilience_score: policy.resilience_score(service_level),
        total_stockout_days,
        total_demand,
        total_fulfilled,
        fill_rate,
        disruption_days,
        bullwhip_ratio: bullwhip_ratio(stats),
    }
}

/// Variance of upstream orders over variance of customer demand.
/// Above 1 means orders swing harder than demand. 0 when demand is flat.
pub fn bullwhip_ratio(stats: &[DailyStat]) -> f64 {
    let demand: Vec<f64> = stats.iter().map(|s| s.demand as f64).collect();
    let orders: Vec<f64> = stats.iter().map(|s| s.order_quantity as f64).collect();

    let demand_variance = variance(&demand);
    if demand_variance == 0.0 {
        return 0.0;
    }
    variance(&orders) / demand_variance
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::implementations::{PredictivePolicy, ReactivePolicy};

    fn stat(
        day: usize,
        demand: u32,
        stock: u64,
        backorders: u64,
        sales: u64,
        order: u32,
    ) -> DailyStat {
        DailyStat {
            day,
            demand,
            inventory_warehouse: stock,
            wip_fab: 0,
            wip_assembly: 0,
            wip_transport: 0,
            backorders,
            sales,
            disruption_active: false,
            predicted_risk: 0.0,
            order_quantity: order,
            inventory_position: stock,
            daily_cost: 0.0,
            agent_action: None,
        }
    }

    #[test]
    fn two_of_four_stockout_days_halves_service_level() {
        let config = SimulationConfig::default();
        let stats = vec![
            stat(1, 100, 50, 0, 100, 0),
            stat(2, 100, 0, 50, 50, 0),
            stat(3, 100, 0, 150, 0, 0),
            stat(4, 100, 40, 0, 150, 0),
        ];

        let reactive = summarize(&stats, &config, &ReactivePolicy::from_config(&config));
        assert_eq!(reactive.total_stockout_days, 2);
        assert_eq!(reactive.service_level, 50.0);
        assert_eq!(reactive.resilience_score, 50.0);
        assert_eq!(reactive.holding_cost, 90.0);
        assert_eq!(reactive.backorder_cost, 2000.0);
        assert_eq!(reactive.total_cost, 2090.0);
        assert_eq!(reactive.total_fulfilled, 300);
        assert_eq!(reactive.fill_rate, 75.0);

        let predictive = summarize(&stats, &config, &PredictivePolicy::from_config(&config));
        assert!((predictive.resilience_score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn bullwhip_ratio_compares_variances() {
        let flat = vec![stat(1, 10, 0, 0, 10, 0), stat(2, 10, 0, 0, 10, 40)];
        assert_eq!(bullwhip_ratio(&flat), 0.0);

        // demand variance 1, order variance 100
        let swinging = vec![stat(1, 9, 0, 0, 9, 0), stat(2, 11, 0, 0, 11, 20)];
        assert!((bullwhip_ratio(&swinging) - 100.0).abs() < 1e-9);
    }
}

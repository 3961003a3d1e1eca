// src/simulation/engine.rs

use crate::error::ConfigError;
use crate::model::disruption::{DisruptionState, FabStatus};
use crate::model::pipeline::Pipeline;
use crate::model::warehouse::Warehouse;
use crate::simulation::config::SimulationConfig;
use crate::simulation::kpi::{summarize, KpiSummary};
use crate::simulation::scenario::Scenario;
use crate::strategy::implementations::PolicyKind;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use serde::Serialize;

/// Snapshot of one simulated day. Serialize so it can go to CSV or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub day: usize,
    pub demand: u32,
    pub inventory_warehouse: u64,
    pub wip_fab: u64,
    pub wip_assembly: u64,
    pub wip_transport: u64,
    pub backorders: u64,
    pub sales: u64,
    pub disruption_active: bool,
    pub predicted_risk: f64,
    pub order_quantity: u32,
    pub inventory_position: u64,
    pub daily_cost: f64,
    pub agent_action: Option<String>,
}

/// Full output of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub policy: PolicyKind,
    pub stats: Vec<DailyStat>,
    pub kpis: KpiSummary,
}

/// Runs one policy against the scenario drawn from the config seed.
pub fn run(config: &SimulationConfig, policy: PolicyKind) -> Result<SimulationResult, ConfigError> {
    let scenario = Scenario::generate(config)?;
    run_with_scenario(config, policy, &scenario)
}

/// Runs one policy against a given scenario.
pub fn run_with_scenario(
    config: &SimulationConfig,
    policy: PolicyKind,
    scenario: &Scenario,
) -> Result<SimulationResult, ConfigError> {
    let simulation = SupplyChainSimulation::new(config, scenario, policy)?;
    Ok(simulation.run())
}

/// Working state of a single run: the fab-to-warehouse chain under one
/// policy. Consumed by `run`.
pub struct SupplyChainSimulation<'a> {
    config: &'a SimulationConfig,
    scenario: &'a Scenario,

    kind: PolicyKind,
    policy: Box<dyn OrderPolicy>,

    warehouse: Warehouse,
    pipeline: Pipeline,
    disruption: DisruptionState,

    current_day: usize,
    history: Vec<DailyStat>,
}

impl<'a> SupplyChainSimulation<'a> {
    pub fn new(
        config: &'a SimulationConfig,
        scenario: &'a Scenario,
        kind: PolicyKind,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if scenario.days() != config.simulation_duration {
            return Err(ConfigError::ScenarioLength {
                expected: config.simulation_duration,
                actual: scenario.days(),
            });
        }

        Ok(Self {
            config,
            scenario,
            kind,
            policy: kind.build(config),
            warehouse: Warehouse::new(config.initial_inventory),
            pipeline: Pipeline::new(config),
            disruption: DisruptionState::new(),
            current_day: 1,
            history: Vec::with_capacity(config.simulation_duration),
        })
    }

    pub fn run(mut self) -> SimulationResult {
        log::info!(
            "starting {} run: {} days, disruption p={}",
            self.policy.name(),
            self.config.simulation_duration,
            self.config.disruption_prob
        );

        while self.current_day <= self.config.simulation_duration {
            self.step();
        }

        let kpis = summarize(&self.history, self.config, self.policy.as_ref());
        log::info!(
            "{} run finished: service level {:.1}%, total cost {:.0}, stockout days {}",
            self.policy.name(),
            kpis.service_level,
            kpis.total_cost,
            kpis.total_stockout_days
        );

        SimulationResult {
            policy: self.kind,
            stats: self.history,
            kpis,
        }
    }

    fn step(&mut self) {
        let day = self.current_day;

        // 1. Disruption event
        let triggered = self.scenario.disruption_on(day);
        if triggered {
            log::warn!("day {}: fab disruption triggered", day);
        }
        let fab_status = self.disruption.step(triggered);

        // 2. Customer demand
        let demand = self.scenario.demand_on(day);

        // 3. Pipeline moves one day closer to the warehouse
        let arriving = self.pipeline.advance();
        self.warehouse.receive_shipment(arriving);

        // 4. Reorder decision against the inventory position
        let context = OrderContext {
            inventory_position: self.inventory_position(),
            fab_status,
            upcoming_events: self.scenario.events_after(day),
        };
        let decision = self.policy.decide_order(&context);
        if decision.quantity > 0 {
            log::debug!("day {}: releasing {} units to fab", day, decision.quantity);
            self.pipeline.start_production(decision.quantity);
        } else if let Some(action) = &decision.action {
            log::debug!("day {}: {}", day, action);
        }

        // 5. Fulfill demand, backorders first
        let sales = self.warehouse.fulfill(demand);

        self.history.push(DailyStat {
            day,
            demand,
            inventory_warehouse: self.warehouse.stock,
            wip_fab: self.pipeline.fab.wip(),
            wip_assembly: self.pipeline.assembly.wip(),
            wip_transport: self.pipeline.transport.wip(),
            backorders: self.warehouse.backorders,
            sales,
            disruption_active: fab_status == FabStatus::Disrupted,
            predicted_risk: decision.predicted_risk,
            order_quantity: decision.quantity,
            inventory_position: self.inventory_position(),
            daily_cost: self
                .warehouse
                .current_cost(self.config.holding_cost, self.config.backorder_cost),
            agent_action: decision.action,
        });

        self.current_day += 1;
    }

    fn inventory_position(&self) -> u64 {
        self.warehouse.stock.saturating_add(self.pipeline.total_wip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::demand::generate_constant_demand;
    use crate::io::events::events_on_days;

    fn calm_config(days: usize) -> SimulationConfig {
        SimulationConfig {
            disruption_prob: 0.0,
            simulation_duration: days,
            ..Default::default()
        }
    }

    #[test]
    fn produces_one_record_per_day() {
        let config = calm_config(45);
        let result = run(&config, PolicyKind::Reactive).unwrap();
        assert_eq!(result.stats.len(), 45);
        for (i, stat) in result.stats.iter().enumerate() {
            assert_eq!(stat.day, i + 1);
        }
    }

    #[test]
    fn first_order_follows_pipeline_timing() {
        // 4000 stock, demand 100/day: position first drops below 2000 on day 22.
        let config = SimulationConfig {
            initial_inventory: 4000,
            ..calm_config(60)
        };
        let scenario =
            Scenario::from_parts(vec![false; 60], generate_constant_demand(60, 100)).unwrap();
        let stats = run_with_scenario(&config, PolicyKind::Reactive, &scenario)
            .unwrap()
            .stats;

        let k = stats.iter().find(|s| s.order_quantity > 0).unwrap().day;
        assert_eq!(k, 22);
        assert_eq!(stats[k - 1].order_quantity, 1000);
        assert_eq!(stats[k - 1].wip_fab, 1000);

        let at = |day: usize| &stats[day - 1];
        assert_eq!(at(k + 9).wip_assembly, 0);
        assert_eq!(at(k + 10).wip_assembly, 1000);
        assert_eq!(at(k + 14).wip_transport, 0);
        assert_eq!(at(k + 15).wip_transport, 1000);

        // warehouse receives on k + 18; demand alone would leave 4000 - 100 * day
        let without_receipts = |day: usize| 4000u64.saturating_sub(100 * day as u64);
        assert_eq!(at(k + 17).inventory_warehouse, without_receipts(k + 17));
        assert_eq!(at(k + 18).inventory_warehouse, without_receipts(k + 18) + 1000);
    }

    #[test]
    fn disruption_blocks_orders_for_fourteen_days() {
        let config = SimulationConfig {
            initial_inventory: 0,
            reorder_level: 100_000,
            ..calm_config(30)
        };
        let scenario =
            Scenario::from_parts(events_on_days(30, &[3]), generate_constant_demand(30, 50))
                .unwrap();
        let stats = run_with_scenario(&config, PolicyKind::Reactive, &scenario)
            .unwrap()
            .stats;

        for stat in &stats {
            let down = (3..=16).contains(&stat.day);
            assert_eq!(stat.disruption_active, down, "day {}", stat.day);
            if down {
                assert_eq!(stat.order_quantity, 0);
                assert!(stat.agent_action.as_deref().unwrap().starts_with("Fab offline"));
            } else {
                assert_eq!(stat.order_quantity, 1000);
            }
        }
    }

    #[test]
    fn rejects_scenario_of_wrong_length() {
        let config = calm_config(10);
        let scenario = Scenario::from_parts(vec![false; 5], vec![0; 5]).unwrap();
        assert!(matches!(
            run_with_scenario(&config, PolicyKind::Predictive, &scenario),
            Err(ConfigError::ScenarioLength { expected: 10, actual: 5 })
        ));
    }

    #[test]
    fn daily_cost_uses_ending_state() {
        let config = SimulationConfig {
            initial_inventory: 150,
            ..calm_config(2)
        };
        let scenario = Scenario::from_parts(vec![false; 2], vec![100, 100]).unwrap();
        let stats = run_with_scenario(&config, PolicyKind::Reactive, &scenario)
            .unwrap()
            .stats;
        assert_eq!(stats[0].daily_cost, 50.0);
        assert_eq!(stats[1].backorders, 50);
        assert_eq!(stats[1].daily_cost, 500.0);
    }
}

//! Properties every run must satisfy, checked through the public API.

use chip_supply_sim::io::demand::generate_constant_demand;
use chip_supply_sim::io::events::events_on_days;
use chip_supply_sim::{
    compare, run, run_with_scenario, ConfigError, PolicyKind, Scenario, SimulationConfig,
};

const POLICIES: [PolicyKind; 2] = [PolicyKind::Reactive, PolicyKind::Predictive];

fn stormy_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        disruption_prob: 0.05,
        simulation_duration: 240,
        seed,
        ..Default::default()
    }
}

#[test]
fn one_record_per_day_in_order() {
    for policy in POLICIES {
        let config = stormy_config(11);
        let result = run(&config, policy).unwrap();
        assert_eq!(result.stats.len(), config.simulation_duration);
        let days: Vec<usize> = result.stats.iter().map(|s| s.day).collect();
        assert_eq!(days, (1..=config.simulation_duration).collect::<Vec<_>>());
    }
}

#[test]
fn inventory_position_moves_only_by_orders_and_sales() {
    for seed in [1, 2, 3] {
        for policy in POLICIES {
            let config = stormy_config(seed);
            let stats = run(&config, policy).unwrap().stats;

            let mut previous = config.initial_inventory as i64;
            for stat in &stats {
                let wip = stat.wip_fab + stat.wip_assembly + stat.wip_transport;
                assert_eq!(stat.inventory_position, stat.inventory_warehouse + wip);

                let expected = previous + stat.order_quantity as i64 - stat.sales as i64;
                assert_eq!(stat.inventory_position as i64, expected, "day {}", stat.day);
                previous = expected;
            }
        }
    }
}

#[test]
fn same_config_same_records() {
    for policy in POLICIES {
        let config = stormy_config(5);
        let a = run(&config, policy).unwrap();
        let b = run(&config, policy).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn no_orders_while_disrupted_and_never_above_capacity() {
    for seed in 0..5 {
        let config = SimulationConfig {
            disruption_prob: 0.1,
            fab_capacity: 700,
            seed,
            ..Default::default()
        };
        let comparison = compare(&config).unwrap();
        for stat in comparison.reactive.stats.iter().chain(&comparison.predictive.stats) {
            if stat.disruption_active {
                assert_eq!(stat.order_quantity, 0, "day {}", stat.day);
            }
            assert!(stat.order_quantity <= config.fab_capacity);
        }
    }
}

#[test]
fn calm_and_generous_chain_never_stocks_out() {
    // Reorder level covers demand over the full 18-day lead time.
    let config = SimulationConfig {
        disruption_prob: 0.0,
        initial_inventory: 9000,
        reorder_level: 7000,
        ..Default::default()
    };
    let comparison = compare(&config).unwrap();
    for result in [&comparison.reactive, &comparison.predictive] {
        assert_eq!(result.kpis.service_level, 100.0);
        assert_eq!(result.kpis.total_stockout_days, 0);
        assert_eq!(result.kpis.disruption_days, 0);
    }
    assert_eq!(comparison.reactive.stats.len(), 180);
}

#[test]
fn calm_runs_of_both_policies_agree_on_orders() {
    let config = SimulationConfig {
        disruption_prob: 0.0,
        ..Default::default()
    };
    let comparison = compare(&config).unwrap();
    for (r, p) in comparison.reactive.stats.iter().zip(&comparison.predictive.stats) {
        assert_eq!(r.order_quantity, p.order_quantity);
        assert_eq!(r.predicted_risk, 0.0);
        assert_eq!(p.predicted_risk, 0.1);
    }
    assert_eq!(comparison.reactive.kpis.total_cost, comparison.predictive.kpis.total_cost);
}

#[test]
fn predictive_risk_rises_five_days_before_a_trigger() {
    let days = 40;
    let trigger_day = 20;
    let config = SimulationConfig {
        disruption_prob: 0.0,
        simulation_duration: days,
        ..Default::default()
    };
    let scenario = Scenario::from_parts(
        events_on_days(days, &[trigger_day]),
        generate_constant_demand(days, 200),
    )
    .unwrap();

    let stats = run_with_scenario(&config, PolicyKind::Predictive, &scenario)
        .unwrap()
        .stats;
    for stat in &stats {
        let warned = (trigger_day - 5..trigger_day).contains(&stat.day);
        let expected = if warned { 0.9 } else { 0.1 };
        assert_eq!(stat.predicted_risk, expected, "day {}", stat.day);
    }
}

#[test]
fn early_trigger_warning_starts_on_day_one() {
    let days = 10;
    let config = SimulationConfig {
        simulation_duration: days,
        ..Default::default()
    };
    let scenario =
        Scenario::from_parts(events_on_days(days, &[3]), generate_constant_demand(days, 200))
            .unwrap();
    let stats = run_with_scenario(&config, PolicyKind::Predictive, &scenario)
        .unwrap()
        .stats;
    let risk: Vec<f64> = stats.iter().map(|s| s.predicted_risk).collect();
    assert_eq!(&risk[..4], &[0.9, 0.9, 0.1, 0.1]);
}

#[test]
fn reference_scenario_first_day() {
    let config = SimulationConfig {
        fab_capacity: 1000,
        initial_inventory: 5000,
        min_demand: 150,
        max_demand: 300,
        reorder_level: 2000,
        reorder_quantity: 3000,
        lead_time_fab: 10,
        lead_time_assembly: 5,
        lead_time_transport: 3,
        disruption_prob: 0.0,
        simulation_duration: 30,
        ..Default::default()
    };
    for policy in POLICIES {
        let stats = run(&config, policy).unwrap().stats;
        let day1 = &stats[0];

        assert_eq!(day1.order_quantity, 0);
        assert_eq!(day1.wip_fab, 0);
        // 225 + sin(1/30) * 45 ~= 226.5, with +/- 11.25 noise
        assert!((215..=238).contains(&day1.demand), "demand {}", day1.demand);
        assert_eq!(day1.inventory_warehouse, u64::from(5000 - day1.demand));
        assert_eq!(day1.backorders, 0);
        assert_eq!(day1.sales, u64::from(day1.demand));
    }
}

#[test]
fn lot_reaches_each_stage_on_its_lead_time() {
    let days = 50;
    let config = SimulationConfig {
        initial_inventory: 1500,
        reorder_level: 1900,
        reorder_quantity: 400,
        simulation_duration: days,
        ..Default::default()
    };
    // Zero demand: exactly one order on day 1, then the position sits at 1900.
    let scenario = Scenario::from_parts(vec![false; days], vec![0; days]).unwrap();
    let stats = run_with_scenario(&config, PolicyKind::Reactive, &scenario)
        .unwrap()
        .stats;

    let ordered: Vec<usize> = stats
        .iter()
        .filter(|s| s.order_quantity > 0)
        .map(|s| s.day)
        .collect();
    assert_eq!(ordered, vec![1]);

    let at = |day: usize| &stats[day - 1];
    assert_eq!(at(10).wip_fab, 400);
    assert_eq!(at(10).wip_assembly, 0);
    assert_eq!(at(11).wip_assembly, 400);
    assert_eq!(at(15).wip_transport, 0);
    assert_eq!(at(16).wip_transport, 400);
    assert_eq!(at(18).inventory_warehouse, 1500);
    assert_eq!(at(19).inventory_warehouse, 1900);
}

#[test]
fn pipeline_holds_more_than_u32_units() {
    // Two 3e9-unit lots sit in the fab before the position clears 4e9.
    let config = SimulationConfig {
        fab_capacity: 3_000_000_000,
        reorder_quantity: 3_000_000_000,
        reorder_level: 4_000_000_000,
        initial_inventory: 0,
        disruption_prob: 0.0,
        simulation_duration: 5,
        ..Default::default()
    };
    for policy in POLICIES {
        let stats = run(&config, policy).unwrap().stats;
        let ordered: Vec<u32> = stats.iter().map(|s| s.order_quantity).collect();
        assert_eq!(ordered, vec![3_000_000_000, 3_000_000_000, 0, 0, 0]);

        assert_eq!(stats[1].wip_fab, 6_000_000_000);
        for stat in &stats[1..] {
            assert!(stat.inventory_position > u64::from(u32::MAX), "day {}", stat.day);
            let wip = stat.wip_fab + stat.wip_assembly + stat.wip_transport;
            assert_eq!(stat.inventory_position, stat.inventory_warehouse + wip);
        }
    }
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let config = SimulationConfig {
        min_demand: 500,
        max_demand: 100,
        ..Default::default()
    };
    for policy in POLICIES {
        assert!(matches!(run(&config, policy), Err(ConfigError::DemandRange { .. })));
    }

    let config = SimulationConfig {
        disruption_prob: 2.0,
        ..Default::default()
    };
    assert!(matches!(compare(&config), Err(ConfigError::ProbabilityOutOfRange(_))));
}

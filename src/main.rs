use anyhow::{Context, Result};
use chip_supply_sim::io::reporting;
use chip_supply_sim::simulation::compare::{compare, compare_over_seeds, summarize_batch};
use chip_supply_sim::{run, PolicyKind, SimulationConfig, SimulationResult};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Reactive,
    Predictive,
    Both,
}

/// Semiconductor supply-chain simulation: reactive vs predictive reordering.
#[derive(Debug, Parser)]
#[command(name = "chip-supply-sim", version)]
struct Cli {
    /// JSON config file (camelCase keys); missing keys use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Override the simulation horizon in days.
    #[arg(long)]
    days: Option<usize>,

    /// Override the per-day disruption probability.
    #[arg(long)]
    disruption_prob: Option<f64>,

    #[arg(long, value_enum, default_value_t = PolicyArg::Both)]
    policy: PolicyArg,

    /// Directory for CSV and JSON exports.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Evaluate both policies over this many consecutive seeds.
    #[arg(long, conflicts_with = "policy")]
    seeds: Option<usize>,

    /// Print the KPI summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // 1. SETUP CONFIGURATION
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(days) = cli.days {
        config.simulation_duration = days;
    }
    if let Some(p) = cli.disruption_prob {
        config.disruption_prob = p;
    }
    config.validate().context("invalid configuration")?;

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    // 2. MULTI-SEED BATCH
    if let Some(count) = cli.seeds {
        let seeds: Vec<u64> = (0..count as u64).map(|i| config.seed.wrapping_add(i)).collect();
        let comparisons = compare_over_seeds(&config, &seeds)?;
        let summary = summarize_batch(&comparisons);

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("=== Batch over {} seeds ===", summary.runs);
            let rows = [
                ("Reactive", &summary.reactive),
                ("Predictive", &summary.predictive),
            ];
            for (name, averages) in rows {
                println!(
                    "{:<10} service {:>6.2}%  cost ${:>12.0}  resilience {:>6.2}  \
                     stockout days {:>6.1}",
                    name,
                    averages.service_level,
                    averages.total_cost,
                    averages.resilience_score,
                    averages.stockout_days
                );
            }
            println!(
                "Predictive was cheaper on {} of {} seeds.",
                summary.predictive_cheaper, summary.runs
            );
        }
        return Ok(());
    }

    // 3. RUN
    let results: Vec<SimulationResult> = match cli.policy {
        PolicyArg::Both => {
            let comparison = compare(&config)?;
            if let Some(dir) = &cli.output_dir {
                reporting::write_kpi_summary(dir.join("kpis.json"), &comparison)?;
            }
            vec![comparison.reactive, comparison.predictive]
        }
        PolicyArg::Reactive => vec![run(&config, PolicyKind::Reactive)?],
        PolicyArg::Predictive => vec![run(&config, PolicyKind::Predictive)?],
    };

    // 4. EXPORT RESULTS
    if let Some(dir) = &cli.output_dir {
        for result in &results {
            let path = dir.join(format!("{}.csv", result.policy.label()));
            reporting::write_daily_stats(&path, &result.stats)?;
        }
    }

    // 5. PRINT KPIs
    if cli.json {
        let kpis: Vec<_> = results.iter().map(|r| (r.policy, &r.kpis)).collect();
        println!("{}", serde_json::to_string_pretty(&kpis)?);
        return Ok(());
    }

    println!(
        "=== Semiconductor Supply Chain: {} days, seed {} ===",
        config.simulation_duration, config.seed
    );
    for result in &results {
        let kpis = &result.kpis;
        println!("\n[{}]", result.policy.label());
        println!("Service level:     {:.2}%", kpis.service_level);
        println!("Resilience score:  {:.2}", kpis.resilience_score);
        println!("Stockout days:     {}", kpis.total_stockout_days);
        println!("Disruption days:   {}", kpis.disruption_days);
        println!("Fill rate:         {:.2}%", kpis.fill_rate);
        println!("Bullwhip ratio:    {:.2}", kpis.bullwhip_ratio);
        println!("Holding cost:      ${:.0}", kpis.holding_cost);
        println!("Backorder cost:    ${:.0}", kpis.backorder_cost);
        println!("Total cost:        ${:.0}", kpis.total_cost);
    }

    Ok(())
}

// src/io/reporting.rs

use crate::error::ReportError;
use crate::simulation::compare::PolicyComparison;
use crate::simulation::engine::DailyStat;
use serde_json::json;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the daily records of a run to a CSV file, one row per day.
///
/// # Arguments
/// * `path` - Where to save the file (e.g., "results/reactive.csv").
/// * `data` - The daily records from the simulation engine.
pub fn write_daily_stats<P: AsRef<Path>>(path: P, data: &[DailyStat]) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    log::info!("exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}

/// Writes the KPI summaries of both policies side by side as JSON.
pub fn write_kpi_summary<P: AsRef<Path>>(
    path: P,
    comparison: &PolicyComparison,
) -> Result<(), ReportError> {
    let summary = json!({
        "seed": comparison.seed,
        "reactive": comparison.reactive.kpis,
        "predictive": comparison.predictive.kpis,
        "costSavings": comparison.cost_savings(),
        "serviceLevelGain": comparison.service_level_gain(),
    });

    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, &summary)?;
    Ok(())
}

/// Writes the full comparison, daily records included, as JSON.
pub fn write_comparison_json<P: AsRef<Path>>(
    path: P,
    comparison: &PolicyComparison,
) -> Result<(), ReportError> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer(writer, comparison)?;
    Ok(())
}

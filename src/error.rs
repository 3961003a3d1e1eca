// src/error.rs

use thiserror::Error;

/// Reasons a configuration is rejected before a run starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min demand {min} exceeds max demand {max}")]
    DemandRange { min: u32, max: u32 },

    #[error("simulation duration must be at least 1 day")]
    ZeroDuration,

    #[error("disruption probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidCost { name: &'static str, value: f64 },

    #[error("scenario covers {actual} days but the horizon is {expected}")]
    ScenarioLength { expected: usize, actual: usize },

    #[error("scenario has {events} event days but {demand} demand days")]
    SeriesMismatch { events: usize, demand: usize },

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while exporting results.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

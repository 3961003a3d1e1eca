//! Discrete-time simulation of a semiconductor supply chain
//! (fab -> assembly -> transport -> warehouse -> customer) under random
//! fab disruptions, comparing a reactive reorder-point policy with a
//! predictive lookahead policy on identical stochastic draws.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{ConfigError, ReportError};
pub use simulation::compare::{compare, compare_over_seeds, PolicyComparison};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{run, run_with_scenario, DailyStat, SimulationResult};
pub use simulation::kpi::KpiSummary;
pub use simulation::scenario::Scenario;
pub use strategy::implementations::PolicyKind;

// src/strategy/traits.rs

use crate::model::disruption::FabStatus;
use std::fmt::Debug;

/// What a policy may look at when deciding today's order.
#[derive(Debug, Clone, Copy)]
pub struct OrderContext<'a> {
    /// Warehouse stock plus everything still in the pipeline.
    pub inventory_position: u64,
    pub fab_status: FabStatus,
    /// Disruption triggers for the days after today, nearest first.
    pub upcoming_events: &'a [bool],
}

/// Outcome of one day's decision.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDecision {
    /// Quantity released to the fab (after capacity and disruption rules).
    pub quantity: u32,
    pub predicted_risk: f64,
    pub action: Option<String>,
}

impl OrderDecision {
    pub fn none(predicted_risk: f64) -> Self {
        Self {
            quantity: 0,
            predicted_risk,
            action: None,
        }
    }
}

/// Decision logic for the fab replenishment order.
///
/// `Send` + `Sync` so runs for different policies can execute in parallel.
pub trait OrderPolicy: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Decides how much to release to the fab today.
    fn decide_order(&mut self, context: &OrderContext) -> OrderDecision;

    /// Resilience score derived from the final service level.
    fn resilience_score(&self, service_level: f64) -> f64 {
        service_level
    }
}

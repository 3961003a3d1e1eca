// src/strategy/implementations.rs

use crate::model::disruption::FabStatus;
use crate::simulation::config::SimulationConfig;
use crate::strategy::risk::{is_high_risk, LookaheadForecaster};
use crate::strategy::traits::{OrderContext, OrderDecision, OrderPolicy};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reorder point raise while risk is high.
pub const SAFETY_STOCK_ADDEND: u32 = 500;
/// Extra stock required under high risk, as a multiple of the reorder quantity.
pub const EXTRA_SAFETY_FACTOR: u32 = 2;
/// Order inflation under high risk.
pub const BULK_FACTOR: f64 = 1.5;
/// Resilience bonus credited to the predictive policy.
pub const RESILIENCE_BONUS: f64 = 1.2;

/// Selects which policy drives a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Reactive,
    Predictive,
}

impl PolicyKind {
    pub fn build(self, config: &SimulationConfig) -> Box<dyn OrderPolicy> {
        match self {
            PolicyKind::Reactive => Box::new(ReactivePolicy::from_config(config)),
            PolicyKind::Predictive => Box::new(PredictivePolicy::from_config(config)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Reactive => "reactive",
            PolicyKind::Predictive => "predictive",
        }
    }
}

// =========================================================================
// Shared reorder-point rule
// =========================================================================

/// Parameters both policies start from.
#[derive(Debug, Clone, Copy)]
pub struct ReorderPoint {
    pub level: u32,
    pub quantity: u32,
    pub fab_capacity: u32,
}

impl ReorderPoint {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            level: config.reorder_level,
            quantity: config.reorder_quantity,
            fab_capacity: config.fab_capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Position is above the trigger.
    NotNeeded,
    /// Triggered, but the fab is down.
    Blocked { requested: u32 },
    /// Released to the fab, possibly 0 if capacity is 0.
    Released(u32),
}

/// Orders when the position falls below `trigger`. A down fab takes no
/// work; otherwise the quantity is capped at fab capacity.
fn place_order(
    context: &OrderContext,
    trigger: u64,
    requested: u32,
    fab_capacity: u32,
) -> Placement {
    if context.inventory_position >= trigger {
        return Placement::NotNeeded;
    }
    match context.fab_status {
        FabStatus::Disrupted => Placement::Blocked { requested },
        FabStatus::Normal => Placement::Released(requested.min(fab_capacity)),
    }
}

fn blocked_label(requested: u32) -> String {
    format!("Fab offline, order of {} units deferred", requested)
}

// =========================================================================
// 1. Reactive Policy (fixed reorder point)
// =========================================================================

/// Classic (s, Q) rule: order Q when the inventory position drops below s.
/// It only responds once a disruption has already drained the pipeline.
#[derive(Debug, Clone)]
pub struct ReactivePolicy {
    rule: ReorderPoint,
}

impl ReactivePolicy {
    pub fn new(rule: ReorderPoint) -> Self {
        Self { rule }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(ReorderPoint::from_config(config))
    }
}

impl OrderPolicy for ReactivePolicy {
    fn name(&self) -> &'static str {
        "Reactive"
    }

    fn decide_order(&mut self, context: &OrderContext) -> OrderDecision {
        let trigger = u64::from(self.rule.level);
        match place_order(context, trigger, self.rule.quantity, self.rule.fab_capacity) {
            Placement::NotNeeded | Placement::Released(0) => OrderDecision::none(0.0),
            Placement::Blocked { requested } => OrderDecision {
                quantity: 0,
                predicted_risk: 0.0,
                action: Some(blocked_label(requested)),
            },
            Placement::Released(quantity) => OrderDecision {
                quantity,
                predicted_risk: 0.0,
                action: Some(format!("Reorder {} units", quantity)),
            },
        }
    }
}

// =========================================================================
// 2. Predictive Policy (lookahead)
// =========================================================================

/// Raises the reorder point and stockpiles when a disruption is visible
/// in the lookahead window.
///
/// Under high risk the trigger becomes
/// `level + SAFETY_STOCK_ADDEND + EXTRA_SAFETY_FACTOR * quantity` and the
/// order is inflated by `BULK_FACTOR` before the capacity cap.
#[derive(Debug, Clone)]
pub struct PredictivePolicy {
    rule: ReorderPoint,
    forecaster: LookaheadForecaster,
}

impl PredictivePolicy {
    pub fn new(rule: ReorderPoint, forecaster: LookaheadForecaster) -> Self {
        Self { rule, forecaster }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(ReorderPoint::from_config(config), LookaheadForecaster::default())
    }
}

impl OrderPolicy for PredictivePolicy {
    fn name(&self) -> &'static str {
        "Predictive"
    }

    fn decide_order(&mut self, context: &OrderContext) -> OrderDecision {
        let risk = self.forecaster.estimate(context.upcoming_events);
        let high_risk = is_high_risk(risk);

        let (trigger, requested) = if high_risk {
            let extra_safety = u64::from(self.rule.quantity) * u64::from(EXTRA_SAFETY_FACTOR);
            let trigger =
                u64::from(self.rule.level) + u64::from(SAFETY_STOCK_ADDEND) + extra_safety;
            let bulk = (self.rule.quantity as f64 * BULK_FACTOR).round() as u32;
            (trigger, bulk)
        } else {
            (u64::from(self.rule.level), self.rule.quantity)
        };

        match place_order(context, trigger, requested, self.rule.fab_capacity) {
            Placement::NotNeeded | Placement::Released(0) => OrderDecision::none(risk),
            Placement::Blocked { requested } => OrderDecision {
                quantity: 0,
                predicted_risk: risk,
                action: Some(blocked_label(requested)),
            },
            Placement::Released(quantity) => {
                let action = if high_risk {
                    format!(
                        "Expediting pre-order of {} units (risk {:.0}%)",
                        quantity,
                        risk * 100.0
                    )
                } else {
                    format!("Reorder {} units", quantity)
                };
                OrderDecision {
                    quantity,
                    predicted_risk: risk,
                    action: Some(action),
                }
            }
        }
    }

    fn resilience_score(&self, service_level: f64) -> f64 {
        (service_level * RESILIENCE_BONUS).min(100.0)
    }
}

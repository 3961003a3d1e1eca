// src/model/disruption.rs

use serde::Serialize;

/// Days the fab stays down after a trigger.
pub const DISRUPTION_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FabStatus {
    Normal,
    Disrupted,
}

/// Tracks fab downtime. A trigger while already down restarts the
/// countdown instead of stacking.
#[derive(Debug, Clone, Default)]
pub struct DisruptionState {
    countdown: u32,
}

impl DisruptionState {
    pub fn new() -> Self {
        Self { countdown: 0 }
    }

    /// Applies today's event and returns the fab status for today.
    ///
    /// The trigger day counts as the first down day, so a single trigger
    /// keeps the fab down for `DISRUPTION_DAYS` consecutive days.
    pub fn step(&mut self, triggered: bool) -> FabStatus {
        if triggered {
            self.countdown = DISRUPTION_DAYS;
        }

        if self.countdown > 0 {
            self.countdown -= 1;
            FabStatus::Disrupted
        } else {
            FabStatus::Normal
        }
    }

    pub fn days_left(&self) -> u32 {
        self.countdown
    }
}

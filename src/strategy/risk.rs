// src/strategy/risk.rs

/// Risk reported when a disruption is visible inside the window.
pub const HIGH_RISK: f64 = 0.9;
/// Baseline risk when nothing is visible.
pub const LOW_RISK: f64 = 0.1;
/// Risk above this counts as high.
pub const RISK_THRESHOLD: f64 = 0.5;

/// Disruption forecaster that peeks at the upcoming event sequence.
///
/// This is a lookahead over known events, not a statistical model: the
/// predictive agent is assumed to see `window` days ahead.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadForecaster {
    window: usize,
}

impl LookaheadForecaster {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Risk score in [0, 1] for the days following today.
    pub fn estimate(&self, upcoming: &[bool]) -> f64 {
        let disruption_ahead = upcoming.iter().take(self.window).any(|&event| event);
        if disruption_ahead {
            HIGH_RISK
        } else {
            LOW_RISK
        }
    }
}

impl Default for LookaheadForecaster {
    fn default() -> Self {
        Self::new(5)
    }
}

pub fn is_high_risk(risk: f64) -> bool {
    risk > RISK_THRESHOLD
}

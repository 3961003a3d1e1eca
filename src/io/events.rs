// src/io/events.rs

use crate::error::ConfigError;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Draws one independent disruption trigger per day.
///
/// No spacing is enforced between triggers; back-to-back triggers just
/// restart the downtime countdown.
pub fn generate_disruption_events<R: Rng + ?Sized>(
    days: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Vec<bool>, ConfigError> {
    let bernoulli =
        Bernoulli::new(probability).map_err(|_| ConfigError::ProbabilityOutOfRange(probability))?;
    Ok(bernoulli.sample_iter(rng).take(days).collect())
}

/// A calm horizon with triggers placed on the given 1-based days.
/// Days past the horizon are ignored.
pub fn events_on_days(days: usize, triggers: &[usize]) -> Vec<bool> {
    let mut events = vec![false; days];
    for &day in triggers {
        if (1..=days).contains(&day) {
            events[day - 1] = true;
        }
    }
    events
}

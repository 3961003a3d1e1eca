// src/io/demand.rs

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Amplitude of the seasonal swing, as a fraction of base demand.
const SEASONAL_AMPLITUDE: f64 = 0.2;
/// Half-width of the uniform noise band, as a fraction of base demand.
const NOISE_BAND: f64 = 0.05;
/// Period scale of the seasonal sine, in days.
const SEASON_DAYS: f64 = 30.0;

/// Generates a demand schedule where every day has the exact same amount.
/// Useful for testing stability.
pub fn generate_constant_demand(days: usize, value: u32) -> Vec<u32> {
    vec![value; days]
}

/// Deterministic part of the demand signal for a 1-based day.
pub fn seasonal_signal(day: usize, base: f64) -> f64 {
    base + (day as f64 / SEASON_DAYS).sin() * SEASONAL_AMPLITUDE * base
}

/// Rounds and clamps a raw demand value: demand is never negative.
fn to_units(raw: f64) -> u32 {
    raw.max(0.0).round() as u32
}

/// Seasonal demand: `base + sin(day / 30) * 0.2 * base + noise`, with noise
/// uniform on `[-0.05 * base, +0.05 * base]`. Element `i` is day `i + 1`.
pub fn generate_seasonal_demand<R: Rng + ?Sized>(days: usize, base: f64, rng: &mut R) -> Vec<u32> {
    let band = NOISE_BAND * base.abs();
    let noise = Uniform::new_inclusive(-band, band);

    (1..=days)
        .map(|day| to_units(seasonal_signal(day, base) + noise.sample(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stays_inside_noise_band_around_season() {
        let base = 225.0;
        let demand = generate_seasonal_demand(180, base, &mut StdRng::seed_from_u64(3));
        assert_eq!(demand.len(), 180);

        for (i, &value) in demand.iter().enumerate() {
            let signal = seasonal_signal(i + 1, base);
            let band = NOISE_BAND * base + 0.5;
            assert!((value as f64 - signal).abs() <= band, "day {}: {}", i + 1, value);
        }
    }

    #[test]
    fn zero_base_gives_zero_demand() {
        let demand = generate_seasonal_demand(20, 0.0, &mut StdRng::seed_from_u64(3));
        assert!(demand.iter().all(|d| *d == 0));
    }

    #[test]
    fn constant_schedule() {
        assert_eq!(generate_constant_demand(3, 8), vec![8, 8, 8]);
    }
}

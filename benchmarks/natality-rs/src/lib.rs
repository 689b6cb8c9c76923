//! Shared data generators for the natality-rs benchmarks.

use natality_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a country-year panel with a noisy linear birth rate.
pub fn generate_panel(size: usize, seed: u64) -> Vec<Observation<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.3).unwrap();
    let hours = Uniform::new(30.0, 42.0).unwrap();
    let spend = Uniform::new(50.0, 3000.0).unwrap();

    (0..size)
        .map(|i| {
            let h = hours.sample(&mut rng);
            let cash = spend.sample(&mut rng);
            let maternity = spend.sample(&mut rng) / 4.0;
            let services = spend.sample(&mut rng);
            Observation::new(format!("C{}", i % 40))
                .with("weekly_hours", h)
                .with("cash_per_capita", cash)
                .with("maternity_per_capita", maternity)
                .with("services_per_capita", services)
                .with("year", 1990.0 + (i / 40) as f64)
                .with(
                    "birth_rate_per_thousand",
                    14.0 - 0.12 * h + 0.0004 * cash + 0.002 * maternity + noise.sample(&mut rng),
                )
        })
        .collect()
}

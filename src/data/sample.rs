//! Synthetic point samples for demos and benchmarks.
//!
//! Points follow a sine wave over `[x_min, x_max]` with Gaussian noise on y. The
//! x-coordinates are drawn uniformly and then sorted, so every sample satisfies the
//! fitters' non-decreasing x requirement. The same config and seed always produce
//! the same points.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::Point;
use crate::error::AppError;

/// Parameters of a synthetic sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
    pub x_min: f64,
    pub x_max: f64,
    /// Peak value of the underlying sine.
    pub amplitude: f64,
    /// Number of full sine periods across the x-range.
    pub cycles: f64,
    /// Standard deviation of the noise added to y.
    pub noise: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 25,
            seed: 42,
            x_min: 0.0,
            x_max: 10.0,
            amplitude: 1.0,
            cycles: 1.5,
            noise: 0.1,
        }
    }
}

pub fn generate_sample(config: &SampleConfig) -> Result<Vec<Point>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::new(2, "Noise must be finite and >= 0."));
    }
    if !(config.amplitude.is_finite() && config.cycles.is_finite()) {
        return Err(AppError::new(2, "Invalid sine settings."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut xs: Vec<f64> = (0..config.count)
        .map(|_| rng.gen_range(config.x_min..=config.x_max))
        .collect();
    xs.sort_by(f64::total_cmp);

    let span = config.x_max - config.x_min;
    let points = xs
        .into_iter()
        .map(|x| {
            let u = (x - config.x_min) / span;
            let clean = config.amplitude * (std::f64::consts::TAU * config.cycles * u).sin();
            let z: f64 = normal.sample(&mut rng);
            Point::new(x, clean + config.noise * z)
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_x_monotonic;

    #[test]
    fn sample_is_sorted_and_in_range() {
        let config = SampleConfig { count: 200, ..SampleConfig::default() };
        let pts = generate_sample(&config).unwrap();
        assert_eq!(pts.len(), 200);
        assert!(is_x_monotonic(&pts));
        assert!(pts.iter().all(|p| p.x >= 0.0 && p.x <= 10.0 && p.y.is_finite()));
    }

    #[test]
    fn same_seed_same_sample() {
        let config = SampleConfig::default();
        assert_eq!(generate_sample(&config).unwrap(), generate_sample(&config).unwrap());

        let other = SampleConfig { seed: 7, ..config.clone() };
        assert_ne!(generate_sample(&config).unwrap(), generate_sample(&other).unwrap());
    }

    #[test]
    fn zero_noise_lies_on_the_sine() {
        let config = SampleConfig { noise: 0.0, ..SampleConfig::default() };
        for p in generate_sample(&config).unwrap() {
            let expected = (std::f64::consts::TAU * 1.5 * p.x / 10.0).sin();
            assert!((p.y - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let bad = SampleConfig { x_min: 1.0, x_max: 1.0, ..SampleConfig::default() };
        assert_eq!(generate_sample(&bad).unwrap_err().exit_code(), 2);
        let bad = SampleConfig { count: 0, ..SampleConfig::default() };
        assert!(generate_sample(&bad).is_err());
    }
}

//! Evenly spaced sample grids.

/// Generate `steps` evenly spaced values between `min` and `max` (inclusive).
///
/// Values are `min + i * delta` with `delta = (max - min) / (steps - 1)`; the last
/// value is pinned to `max` so rounding never moves the right boundary. A single
/// step yields `[min]`, zero steps an empty grid.
pub fn lin_space(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let delta = (max - min) / (steps - 1) as f64;
            let mut out: Vec<f64> = (0..steps - 1).map(|i| min + i as f64 * delta).collect();
            out.push(max);
            out
        }
    }
}

//! Sampling grids for integration output and the static potential curve

use anyhow::{ensure, Result};

/// Half-open fixed-step time grid `[0, dt, 2*dt, ...)`, stopping strictly
/// before `t_max`. Length is `ceil(t_max / dt)`.
///
/// The grid is the set of *output* times: the integrator reports state at
/// exactly these points and the animation indexes frames by position in
/// this sequence.
pub fn time_grid(dt: f64, t_max: f64) -> Result<Vec<f64>> {
    ensure!(dt > 0.0, "time step must be positive, got {dt}");
    ensure!(t_max > 0.0, "duration must be positive, got {t_max}");

    let n = (t_max / dt).ceil() as usize;
    Ok((0..n).map(|i| i as f64 * dt).collect())
}

/// `count` evenly spaced values from `low` to `high`, both ends inclusive.
/// Consumed only by the potential-curve export, never by the integrator.
pub fn linspace(low: f64, high: f64, count: usize) -> Result<Vec<f64>> {
    ensure!(count >= 2, "linspace needs at least two samples, got {count}");
    ensure!(high > low, "linspace range must be increasing, got [{low}, {high}]");

    let step = (high - low) / (count - 1) as f64;
    let mut xs: Vec<f64> = (0..count).map(|i| low + i as f64 * step).collect();
    xs[count - 1] = high; // endpoint held exact
    Ok(xs)
}

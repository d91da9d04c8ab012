//! Adaptive time integration over a fixed output grid
//!
//! A single embedded Runge–Kutta integrator drives every law through
//! `Dynamics`: classical RK4 step doubling with Richardson extrapolation
//! for the error estimate, error controlled per component by
//! `atol`/`rtol` from `Parameters`. Internal steps subdivide freely but
//! are clamped to land exactly on each requested grid time, so downstream
//! indexing by grid position stays valid.

use anyhow::{ensure, Result};
use log::debug;
use nalgebra::SVector;

use crate::simulation::dynamics::Dynamics;
use crate::simulation::params::Parameters;
use crate::simulation::trajectory::Trajectory;

const SAFETY: f64 = 0.9; // step controller safety factor
const MAX_GROWTH: f64 = 5.0; // cap on step growth per accepted step
const MIN_SHRINK: f64 = 0.1; // cap on step shrink per rejected step
const H_MIN: f64 = 1e-12; // below this the controller has stalled

enum StepOutcome<const N: usize> {
    Accept { y_new: SVector<f64, N>, h_next: f64 },
    Reject { h_next: f64 },
}

/// Integrate `law` from `y0` across `grid`, reporting state at every grid
/// time in order. Entry 0 is `y0` exactly.
///
/// Aborts if the law reports a singularity or the step controller cannot
/// meet tolerance before reaching the next output time.
pub fn integrate<const N: usize>(
    law: &dyn Dynamics<N>,
    y0: SVector<f64, N>,
    grid: &[f64],
    params: &Parameters,
) -> Result<Trajectory<N>> {
    let mut states = Vec::with_capacity(grid.len());
    let Some((&t0, rest)) = grid.split_first() else {
        return Ok(Trajectory {
            times: Vec::new(),
            states,
        });
    };
    states.push(y0);

    let mut t = t0;
    let mut y = y0;
    let mut h_try = params.dt; // controller-owned trial step
    let mut accepted: usize = 0;
    let mut rejected: usize = 0;

    for &t_out in rest {
        while t < t_out {
            let span = t_out - t;
            let h = h_try.min(span); // never overshoot the output time

            match controlled_step(law, t, &y, h, params)? {
                StepOutcome::Accept { y_new, h_next } => {
                    t = if h < span { t + h } else { t_out };
                    y = y_new;
                    h_try = h_next;
                    accepted += 1;
                }
                StepOutcome::Reject { h_next } => {
                    ensure!(
                        h_next >= H_MIN,
                        "step size underflow at t = {t}; tolerance cannot be met"
                    );
                    h_try = h_next;
                    rejected += 1;
                }
            }
        }
        states.push(y);
    }

    debug!(
        "integrated {} grid points ({} accepted, {} rejected internal steps)",
        grid.len(),
        accepted,
        rejected
    );

    Ok(Trajectory {
        times: grid.to_vec(),
        states,
    })
}

/// Attempt one step of size `h`: compare a full RK4 step against two half
/// steps and accept when the scaled Richardson error estimate is <= 1.
fn controlled_step<const N: usize>(
    law: &dyn Dynamics<N>,
    t: f64,
    y: &SVector<f64, N>,
    h: f64,
    params: &Parameters,
) -> Result<StepOutcome<N>> {
    let y_full = rk4_step(law, t, y, h)?;
    let y_half = rk4_step(law, t, y, 0.5 * h)?;
    let y_two = rk4_step(law, t + 0.5 * h, &y_half, 0.5 * h)?;

    // Scaled max-norm of the error estimate (y_two - y_full)/15
    let mut err: f64 = 0.0;
    for i in 0..N {
        let e = (y_two[i] - y_full[i]) / 15.0;
        let scale = params.atol + params.rtol * y[i].abs().max(y_two[i].abs());
        err = err.max((e / scale).abs());
    }

    if err <= 1.0 {
        // Richardson extrapolation: fifth-order value from the two
        // fourth-order results
        let y_new = y_two + (y_two - y_full) / 15.0;
        let factor = if err == 0.0 {
            MAX_GROWTH
        } else {
            (SAFETY * err.powf(-0.2)).min(MAX_GROWTH)
        };
        Ok(StepOutcome::Accept {
            y_new,
            h_next: h * factor,
        })
    } else {
        let factor = (SAFETY * err.powf(-0.25)).max(MIN_SHRINK);
        Ok(StepOutcome::Reject { h_next: h * factor })
    }
}

/// Classical fourth-order Runge–Kutta step
/// k1 = f(t, y), k2 = f(t + h/2, y + h/2 k1),
/// k3 = f(t + h/2, y + h/2 k2), k4 = f(t + h, y + h k3)
fn rk4_step<const N: usize>(
    law: &dyn Dynamics<N>,
    t: f64,
    y: &SVector<f64, N>,
    h: f64,
) -> Result<SVector<f64, N>> {
    let y = *y;
    let half_h = 0.5 * h;

    let k1 = law.derivative(t, &y)?;
    let k2 = law.derivative(t + half_h, &(y + k1 * half_h))?;
    let k3 = law.derivative(t + half_h, &(y + k2 * half_h))?;
    let k4 = law.derivative(t + h, &(y + k3 * h))?;

    // y_n+1 = y_n + h/6 (k1 + 2 k2 + 2 k3 + k4)
    Ok(y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0))
}

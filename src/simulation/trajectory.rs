//! Trajectory storage and projection to renderable coordinates
//!
//! `Trajectory` is the write-once output of the integrator: one state per
//! time-grid entry, in strict time order. The projections here are pure
//! batch transforms producing the index-aligned sequences the rendering
//! collaborator reads per frame.

use nalgebra::SVector;

use crate::simulation::dynamics::{CentralField, PotentialWell};

/// State sequence aligned index-for-index with its time grid
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const N: usize> {
    pub times: Vec<f64>,             // the output grid, one entry per state
    pub states: Vec<SVector<f64, N>>, // integrated states in time order
}

impl<const N: usize> Trajectory<N> {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Cartesian path derived from a polar trajectory
#[derive(Debug, Clone)]
pub struct Path {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Project a polar trajectory onto the plane:
/// x_i = r_i cos(theta_i), y_i = r_i sin(theta_i)
pub fn project_path(traj: &Trajectory<3>) -> Path {
    let mut x = Vec::with_capacity(traj.len());
    let mut y = Vec::with_capacity(traj.len());
    for s in &traj.states {
        let (r, theta) = (s[0], s[2]);
        x.push(r * theta.cos());
        y.push(r * theta.sin());
    }
    Path { x, y }
}

/// Total mechanical energy along a central-field trajectory:
/// E_i = 1/2 (rdot_i^2 + h^2/r_i^2) + V(r_i)
pub fn orbital_energy(traj: &Trajectory<3>, field: &CentralField) -> Vec<f64> {
    traj.states
        .iter()
        .map(|s| {
            let (r, rdot) = (s[0], s[1]);
            let h = field.h;
            0.5 * (rdot * rdot + h * h / (r * r)) + field.potential(r)
        })
        .collect()
}

/// Total mechanical energy along a well trajectory:
/// E_i = 1/2 m v_i^2 + V(x_i)
pub fn well_energy(traj: &Trajectory<2>, well: &PotentialWell) -> Vec<f64> {
    traj.states
        .iter()
        .map(|s| {
            let (x, v) = (s[0], s[1]);
            0.5 * well.mass * v * v + well.potential(x)
        })
        .collect()
}

/// Spread of a conserved series relative to its initial magnitude.
/// Diagnostic only; drift is surfaced, never thrown.
pub fn relative_drift(series: &[f64]) -> f64 {
    let Some(&first) = series.first() else {
        return 0.0;
    };
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &e in series {
        lo = lo.min(e);
        hi = hi.max(e);
    }
    (hi - lo) / first.abs().max(f64::MIN_POSITIVE)
}

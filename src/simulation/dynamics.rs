//! Force laws and the first-order equations of motion
//!
//! Each law implements [`Dynamics`], the right-hand side f(t, y) of the
//! system dy/dt = f(t, y) consumed by the integrator. Laws are pure and
//! safe to evaluate many times per step.

use anyhow::{ensure, Result};
use nalgebra::SVector;

use crate::simulation::states::{SVec2, SVec3};

/// Right-hand side of a first-order ODE system of dimension `N`
/// Implementations add no state of their own between calls
pub trait Dynamics<const N: usize> {
    /// Time derivative of the state `y` at time `t`
    /// `t` is part of the standard ODE interface; the laws here are autonomous
    fn derivative(&self, t: f64, y: &SVector<f64, N>) -> Result<SVector<f64, N>>;
}

/// Attractive central field F(r) = -gamma / r^exponent in polar form
/// State is `[r, rdot, theta]`; `h` is the angular momentum constant
#[derive(Debug, Clone)]
pub struct CentralField {
    pub gamma: f64,    // attraction strength
    pub exponent: i32, // inverse-power exponent: 3 = inverse-cube, 2 = Kepler
    pub h: f64,        // angular momentum, r^2 * thetadot
}

impl CentralField {
    /// Radial force per unit mass; caller guarantees r > 0
    pub fn force(&self, r: f64) -> f64 {
        -self.gamma / r.powi(self.exponent)
    }

    /// Potential V(r) with F = -dV/dr, taken zero at infinity
    pub fn potential(&self, r: f64) -> f64 {
        let p = self.exponent - 1;
        -self.gamma / (p as f64 * r.powi(p))
    }
}

impl Dynamics<3> for CentralField {
    fn derivative(&self, _t: f64, y: &SVec3) -> Result<SVec3> {
        let (r, rdot) = (y[0], y[1]);
        ensure!(r > 0.0, "central field evaluated at r = {r}; force law is singular at r = 0");

        let r2 = r * r;
        let r3 = r2 * r;

        // Newton's 2nd law in polar form as THREE first order equations,
        // theta eliminated as an independent degree of freedom:
        // d/dt [r, rdot, theta] = [rdot, F(r) + h^2/r^3, h/r^2]
        Ok(SVec3::new(
            rdot,
            self.force(r) + self.h * self.h / r3, // centrifugal term h^2/r^3
            self.h / r2,
        ))
    }
}

/// One-dimensional well V(x) = a/x + b*x
/// State is `[x, v]`; motion stays on the x > 0 branch
#[derive(Debug, Clone)]
pub struct PotentialWell {
    pub mass: f64,
    pub a: f64, // coefficient of the 1/x term
    pub b: f64, // coefficient of the linear term
}

impl PotentialWell {
    pub fn potential(&self, x: f64) -> f64 {
        self.a / x + self.b * x
    }

    /// F(x) = -V'(x)
    pub fn force(&self, x: f64) -> f64 {
        self.a / (x * x) - self.b
    }
}

impl Dynamics<2> for PotentialWell {
    fn derivative(&self, _t: f64, y: &SVec2) -> Result<SVec2> {
        let (x, v) = (y[0], y[1]);
        ensure!(x > 0.0, "potential well evaluated at x = {x}; V(x) is singular at x = 0");

        // Newton's 2nd law as TWO first order equations:
        // d/dt [x, v] = [v, F(x)/m]
        Ok(SVec2::new(v, self.force(x) / self.mass))
    }
}

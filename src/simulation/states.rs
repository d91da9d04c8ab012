//! Core state types for the particle simulation.
//!
//! A system state is a small fixed-size real vector:
//! - `SVec3` for the polar central-field form `[r, rdot, theta]`
//! - `SVec2` for the 1-D potential-well form `[x, v]`
//!
//! Polar states keep `r > 0` throughout a run; the force laws are singular
//! at the origin and the dynamics refuse to evaluate there.

use nalgebra::{Vector2, Vector3};
pub type SVec2 = Vector2<f64>;
pub type SVec3 = Vector3<f64>;

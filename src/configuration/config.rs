//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – time stepping and solver tolerances
//! - [`LawConfig`]        – the physical law and its constants
//! - the initial state vector
//! - [`CurveConfig`]      – optional spatial sampling for the potential curve
//!
//! # YAML format
//! An example central-field scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.0025              # output grid spacing
//!   t_max: 0.86             # total simulation time (exclusive)
//!   atol: 1.0e-8            # absolute error tolerance
//!   rtol: 1.0e-8            # relative error tolerance
//!
//! law:
//!   type: central_field
//!   gamma: 8.0              # bigger gamma means more attractive field
//!   exponent: 2             # F(r) = -gamma / r^exponent
//!   h: 1.0                  # angular momentum constant
//!
//! initial: [1.0, 0.0, 0.0]  # [r, rdot, theta]
//! ```
//!
//! A potential-well scenario swaps the law block and uses a two-component
//! initial state `[x, v]`, plus an optional `curve` block sampled only for
//! the static V(x) plot:
//!
//! ```yaml
//! law:
//!   type: potential_well
//!   mass: 1.0
//!   a: 4.0                  # V(x) = a/x + b*x
//!   b: 1.0
//!
//! initial: [4.0, 0.0]
//!
//! curve:
//!   low: 0.5
//!   high: 6.0
//!   samples: 101
//! ```
//!
//! The scenario builder maps this configuration into its runtime
//! representation and validates it before any integration starts.

use serde::Deserialize;

/// Time stepping and solver tolerances for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // output grid spacing
    pub t_max: f64, // end of the time grid, exclusive
    pub atol: f64,  // absolute error tolerance
    pub rtol: f64,  // relative error tolerance
}

/// Which physical law drives the particle
/// `type: central_field` or `type: potential_well`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum LawConfig {
    #[serde(rename = "central_field")] // F(r) = -gamma/r^exponent in polar form, state [r, rdot, theta]
    CentralField { gamma: f64, exponent: i32, h: f64 },

    #[serde(rename = "potential_well")] // V(x) = a/x + b*x in 1-D, state [x, v]
    PotentialWell { mass: f64, a: f64, b: f64 },
}

/// Spatial sampling used only for plotting the static potential curve
#[derive(Deserialize, Debug, Clone)]
pub struct CurveConfig {
    pub low: f64,       // left end of the sampled range, inclusive
    pub high: f64,      // right end of the sampled range, inclusive
    pub samples: usize, // number of sample points
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // time stepping and tolerances
    pub law: LawConfig,               // physical law and its constants
    pub initial: Vec<f64>,            // initial state, shape set by the law
    pub curve: Option<CurveConfig>,   // potential-curve sampling, well scenarios only
}

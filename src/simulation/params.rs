//! Numerical parameters for a scenario run
//!
//! `Parameters` holds runtime settings:
//! - output grid spacing and end time,
//! - error tolerances for the adaptive stepper

use anyhow::{ensure, Result};

use crate::configuration::config::ParametersConfig;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,    // output grid spacing
    pub t_max: f64, // end of the time grid, exclusive
    pub atol: f64,  // absolute error tolerance
    pub rtol: f64,  // relative error tolerance
}

impl Parameters {
    /// Validate the YAML-facing config and convert to runtime parameters.
    /// Configuration errors surface here, before any integration starts.
    pub fn from_config(cfg: &ParametersConfig) -> Result<Self> {
        ensure!(cfg.dt > 0.0, "time step dt must be positive, got {}", cfg.dt);
        ensure!(cfg.t_max > 0.0, "t_max must be positive, got {}", cfg.t_max);
        ensure!(cfg.atol > 0.0, "atol must be positive, got {}", cfg.atol);
        ensure!(cfg.rtol > 0.0, "rtol must be positive, got {}", cfg.rtol);
        Ok(Self {
            dt: cfg.dt,
            t_max: cfg.t_max,
            atol: cfg.atol,
            rtol: cfg.rtol,
        })
    }
}

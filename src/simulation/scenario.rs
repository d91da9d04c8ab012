//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles
//! (`CentralScenario` for polar central fields, `WellScenario` for the
//! 1-D potential well) containing:
//! - numerical parameters (`Parameters`)
//! - the physical law (`CentralField`/`PotentialWell`)
//! - the validated initial state
//!
//! All configuration errors surface at build time, before integration.
//! Running a scenario produces a run bundle with the trajectory and every
//! derived coordinate sequence the rendering collaborator consumes.

use anyhow::{bail, ensure, Result};
use log::info;

use crate::configuration::config::{CurveConfig, LawConfig, ScenarioConfig};
use crate::simulation::dynamics::{CentralField, PotentialWell};
use crate::simulation::grid::{linspace, time_grid};
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{SVec2, SVec3};
use crate::simulation::trajectory::{
    orbital_energy, project_path, well_energy, Path, Trajectory,
};

/// Runtime bundle for a central-field scenario
pub struct CentralScenario {
    pub parameters: Parameters,
    pub law: CentralField,
    pub initial: SVec3, // [r, rdot, theta] at t = 0
}

/// Everything a central-field run hands to the renderer
pub struct CentralRun {
    pub trajectory: Trajectory<3>,
    pub path: Path,       // Cartesian path, aligned with the trajectory
    pub energy: Vec<f64>, // conservation diagnostic, aligned with the trajectory
}

impl CentralScenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let LawConfig::CentralField { gamma, exponent, h } = cfg.law else {
            bail!("scenario does not describe a central-field law");
        };
        let parameters = Parameters::from_config(&cfg.parameters)?;

        ensure!(gamma > 0.0, "attraction constant gamma must be positive, got {gamma}");
        ensure!(exponent >= 2, "force exponent must be at least 2, got {exponent}");
        ensure!(
            cfg.initial.len() == 3,
            "central-field initial state must be [r, rdot, theta], got {} components",
            cfg.initial.len()
        );
        let initial = SVec3::new(cfg.initial[0], cfg.initial[1], cfg.initial[2]);
        ensure!(initial[0] > 0.0, "initial radius must be positive, got {}", initial[0]);

        Ok(Self {
            parameters,
            law: CentralField { gamma, exponent, h },
            initial,
        })
    }

    /// Integrate and project; everything downstream reads the result by index
    pub fn run(&self) -> Result<CentralRun> {
        let grid = time_grid(self.parameters.dt, self.parameters.t_max)?;
        info!(
            "central field (gamma = {}, exponent = {}): {} grid points",
            self.law.gamma,
            self.law.exponent,
            grid.len()
        );

        let trajectory = integrate(&self.law, self.initial, &grid, &self.parameters)?;
        let path = project_path(&trajectory);
        let energy = orbital_energy(&trajectory, &self.law);

        Ok(CentralRun {
            trajectory,
            path,
            energy,
        })
    }
}

/// Runtime bundle for a potential-well scenario
pub struct WellScenario {
    pub parameters: Parameters,
    pub law: PotentialWell,
    pub initial: SVec2,             // [x, v] at t = 0
    pub curve: Option<CurveConfig>, // sampling for the static V(x) curve
}

/// Sampled potential curve for the static plot
pub struct PotentialCurve {
    pub x: Vec<f64>,
    pub v: Vec<f64>, // V(x) at each sample
}

/// Everything a well run hands to the renderer
pub struct WellRun {
    pub trajectory: Trajectory<2>,
    pub energy: Vec<f64>, // total energy, aligned with the trajectory
    pub curve: Option<PotentialCurve>,
}

impl WellScenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let LawConfig::PotentialWell { mass, a, b } = cfg.law else {
            bail!("scenario does not describe a potential-well law");
        };
        let parameters = Parameters::from_config(&cfg.parameters)?;

        ensure!(mass > 0.0, "particle mass must be positive, got {mass}");
        ensure!(
            cfg.initial.len() == 2,
            "well initial state must be [x, v], got {} components",
            cfg.initial.len()
        );
        let initial = SVec2::new(cfg.initial[0], cfg.initial[1]);
        ensure!(initial[0] > 0.0, "initial position must be positive, got {}", initial[0]);

        if let Some(curve) = &cfg.curve {
            ensure!(curve.samples >= 2, "curve needs at least two samples, got {}", curve.samples);
            ensure!(
                curve.low > 0.0,
                "curve range must stay right of the singularity at x = 0, got low = {}",
                curve.low
            );
            ensure!(
                curve.high > curve.low,
                "curve range must be increasing, got [{}, {}]",
                curve.low,
                curve.high
            );
        }

        Ok(Self {
            parameters,
            law: PotentialWell { mass, a, b },
            initial,
            curve: cfg.curve,
        })
    }

    pub fn run(&self) -> Result<WellRun> {
        let grid = time_grid(self.parameters.dt, self.parameters.t_max)?;
        info!(
            "potential well (mass = {}): {} grid points",
            self.law.mass,
            grid.len()
        );

        let curve = match &self.curve {
            Some(c) => {
                let x = linspace(c.low, c.high, c.samples)?;
                let v = x.iter().map(|&x| self.law.potential(x)).collect();
                Some(PotentialCurve { x, v })
            }
            None => None,
        };

        let trajectory = integrate(&self.law, self.initial, &grid, &self.parameters)?;
        let energy = well_energy(&trajectory, &self.law);

        Ok(WellRun {
            trajectory,
            energy,
            curve,
        })
    }
}
